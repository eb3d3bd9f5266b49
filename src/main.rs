fn main() {
    unhex::boot::init_common();
    let matches = unhex::cli::parse_args();

    if let Err(err) = unhex::cli::actions::run(&matches) {
        log::debug!("Conversion failed: {err:?}");
        eprintln!("unhex: error: {err:#}");
        std::process::exit(1);
    }
}
