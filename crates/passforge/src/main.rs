fn main() -> Result<(), log::SetLoggerError> {
    passforge::init_logging()?;
    println!("{}", passforge::run());
    Ok(())
}
