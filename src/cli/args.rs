use clap::Parser;

#[derive(Parser)]
#[command(name = "add", version, about = "ARITH CLI")]
pub struct CliArgs {
    /// Operands: <int:a> <int:b>
    ///
    /// Exactly two are required. Each is converted with parse-or-zero
    /// semantics, so non-numeric text becomes 0.
    #[arg(value_name = "int", allow_hyphen_values = true)]
    pub operands: Vec<String>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
