use compte_seed::config::SeedConfig;
use log::info;

fn main() {
    env_logger::init();
    let config = SeedConfig::default_location();
    let summary = compte_seed::run(&config)
        .unwrap_or_else(|err| panic!("Failed to generate seed file: {err} ({err:?})"));
    for (kind, count) in &summary.per_kind {
        info!("{count} records from {kind} articles");
    }
    println!(
        "✅ Wrote {} with {} entries.",
        summary.output_file.display(),
        summary.records
    );
}
