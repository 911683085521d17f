fn main() -> pipeline::Result<()> {
    pipeline::Builder::new().input("src/model.rs").compile()?;
    Ok(())
}
