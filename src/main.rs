use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    alivegpt::cli::main()
}
