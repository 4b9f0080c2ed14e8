use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON file holding an array of decoded ledgers
    #[arg(short, long)]
    pub input: PathBuf,

    /// Destination for the JSON-lines operation records (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to .env file (e.g., .env.pubnet)
    #[arg(short, long, default_value = ".env")]
    pub env_file: String,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let args = Args::try_parse_from(["stellar-etl", "--input", "ledgers.json"]).unwrap();
        assert_eq!(args.input, PathBuf::from("ledgers.json"));
        assert!(args.output.is_none());
        assert_eq!(args.env_file, ".env");
    }

    #[test]
    fn test_parse_all_args() {
        let args = Args::try_parse_from([
            "stellar-etl",
            "-i",
            "in.json",
            "-o",
            "out.jsonl",
            "-e",
            ".env.testnet",
        ])
        .unwrap();
        assert_eq!(args.output, Some(PathBuf::from("out.jsonl")));
        assert_eq!(args.env_file, ".env.testnet");
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["stellar-etl"]).is_err());
    }
}
