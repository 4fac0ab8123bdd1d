use clap::error::ErrorKind;
use clap::Parser;
use color_print::cprintln;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input binary file
    input: String,

    /// Output file
    #[clap(short, long, default_value = "rom.vhdl")]
    output: String,
}

const EXIT_USAGE: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_OUTPUT: i32 = 3;

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
    println!("LMC VHDL ROM Builder {}", env!("CARGO_PKG_VERSION"));

    println!("  < {}", args.input);
    let bytes = match std::fs::read(&args.input) {
        Ok(bytes) => bytes,
        Err(err) => {
            cprintln!("<red,bold>error</>: failed to open file: {}: {}", args.input, err);
            std::process::exit(EXIT_INPUT);
        }
    };

    println!("  > {}", args.output);
    if let Err(err) = std::fs::write(&args.output, rom_entity(&bytes)) {
        cprintln!("<red,bold>error</>: failed to create file: {}: {}", args.output, err);
        std::process::exit(EXIT_OUTPUT);
    }
}

/// Render the whole ROM entity: a byte-wide, byte-addressed array sized to
/// the input, each byte as an MSB-first '0'/'1' string literal.
fn rom_entity(bytes: &[u8]) -> String {
    let mut out = rom_header(bytes.len());
    for (idx, byte) in bytes.iter().enumerate() {
        let sep = if idx + 1 == bytes.len() { ' ' } else { ',' };
        out.push_str(&format!("\t\t\t\t\t\t\t\t\t\t\"{:08b}\"{}\n", byte, sep));
    }
    out.push_str(ROM_FOOTER);
    out
}

fn rom_header(len: usize) -> String {
    format!(
        "library ieee;
use ieee.std_logic_1164.all;
use ieee.numeric_std.all;

entity rom is
	port (
			sel			: in 	std_logic;						--- select
			address		: in	std_logic_vector(7 downto 0);	--- address to read
			data		: out	std_logic_vector(7 downto 0)	--- data
		);
end entity;

architecture rtl of rom is
	type ROM_ARRAY is array (0 to {}) of std_logic_vector(7 downto 0);

	constant	memory	: ROM_ARRAY	:= (
",
        len as i64 - 1
    )
}

const ROM_FOOTER: &str = ");
begin

	process (sel,address)
	begin
		if (sel = '0')
		then
			data <= (others => 'Z');

		elsif (sel = '1')
		then
			data <= memory(to_integer(unsigned(address)));
		end if;
	end process;

end architecture rtl;
";
