use clap::error::ErrorKind;
use clap::Parser;
use color_print::{cformat, cprintln};

use lmcasm::check;
use lmcasm::error::{Error, Report};
use lmcasm::gen::{self, Encoded};
use lmcasm::label::Labels;
use lmcasm::msg::Msg;
use lmcasm::parser::{self, Inst};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    input: String,

    /// Output file
    #[clap(short, long, default_value = "lmc.bin")]
    output: String,

    /// Dump the assembled listing
    #[clap(short, long)]
    dump: bool,
}

// One exit code per failure class.
const EXIT_USAGE: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_OUTPUT: i32 = 3;
const EXIT_ASSEMBLY: i32 = 4;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => std::process::exit(0),
                _ => std::process::exit(EXIT_USAGE),
            }
        }
    };
    println!("LMC Assembler {}", env!("CARGO_PKG_VERSION"));

    println!("1. Read File and Parse Lines");
    println!("  < {}", args.input);
    let source = match std::fs::read_to_string(&args.input) {
        Ok(source) => source,
        Err(err) => fail(Error::FileOpen(args.input.clone(), err), EXIT_INPUT),
    };
    let raw_lines: Vec<&str> = source.lines().collect();
    let mut labels = Labels::new();
    let (program, mut reports) = parser::parse(&source, &mut labels);

    println!("2. Assign Addresses and Check");
    reports.extend(check::check(&program, &mut labels));
    if !reports.is_empty() {
        print_reports(&reports, &args.input, &raw_lines, &labels);
        std::process::exit(EXIT_ASSEMBLY);
    }

    println!("3. Generate Binary");
    let binary = match gen::generate(&program, &labels) {
        Ok(binary) => binary,
        Err(reports) => {
            print_reports(&reports, &args.input, &raw_lines, &labels);
            std::process::exit(EXIT_ASSEMBLY);
        }
    };

    println!("  > {}", args.output);
    use std::io::Write;
    let mut file = match std::fs::File::create(&args.output) {
        Ok(file) => file,
        Err(err) => fail(Error::FileCreate(args.output.clone(), err), EXIT_OUTPUT),
    };
    if let Err(err) = file.write_all(&binary) {
        fail(Error::FileWrite(args.output.clone(), err), EXIT_OUTPUT);
    }

    if args.dump {
        dump(&program, &labels);
    }
}

fn fail(err: Error, code: i32) -> ! {
    cprintln!("<red,bold>error</>: {}", err);
    std::process::exit(code);
}

fn print_reports(reports: &[Report], path: &str, raw_lines: &[&str], labels: &Labels) {
    for report in reports {
        let raw = raw_lines.get(report.line).copied().unwrap_or("");
        Msg::Error(report.err.to_string()).print(path, report.line, raw);

        // Point a re-definition back at the first binding site.
        if let Error::DuplicateLabel(name) = &report.err {
            if let Some(prev) = labels.def_line(name) {
                let prev_raw = raw_lines.get(prev).copied().unwrap_or("");
                Msg::Note(format!("`{}` already defined here", name)).print(path, prev, prev_raw);
            }
        }
    }
}

fn dump(program: &[Inst], labels: &Labels) {
    let mut address: u16 = 0;
    for inst in program {
        let bytes = match gen::encode(inst, labels) {
            Ok(Encoded::Data(byte)) => format!("{:02X}", byte),
            Ok(Encoded::Code(op, operand)) => format!("{:02X} {:02X}", op, operand),
            Err(_) => cformat!("<red,bold>!! !!</>"),
        };
        let label = inst.label.map(|id| labels.name(id)).unwrap_or("");
        let operand = inst.operand.map(|id| labels.name(id)).unwrap_or("");
        println!(
            "{}",
            cformat!(
                "[{:04X}] {:<5} | {:>4}: <green>{:<8}</> <red>{:<3}</> <blue>{}</>",
                address,
                bytes,
                inst.line + 1,
                label,
                inst.op,
                operand,
            )
        );
        address = address.wrapping_add(inst.op.width());
    }
    println!("------+-------+--------------------------------");
}
