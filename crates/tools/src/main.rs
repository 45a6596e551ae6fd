use anyhow::bail;

use storesight_tools::{Tools, ToolsConfig};

fn main() -> anyhow::Result<()> {
    storesight_observability::init();

    let data_dir = std::env::var("STORESIGHT_DATA_DIR").unwrap_or_else(|_| {
        tracing::warn!("STORESIGHT_DATA_DIR not set; using ./data");
        "data".to_string()
    });
    let tools = Tools::new(ToolsConfig::from_data_dir(&data_dir));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let output = match args.first().map(String::as_str) {
        Some("scan") => tools.scan_daily_performance()?,
        Some("audit") => tools.audit_anomalies()?,
        Some("drill") => match (args.get(1), args.get(2)) {
            (Some(location_id), Some(date)) => tools.drill_down(location_id, date)?,
            _ => bail!("usage: storesight drill <location_id> <date>"),
        },
        Some("policy") => match args.get(1) {
            Some(policy_id) => tools.load_policy(policy_id)?,
            None => bail!("usage: storesight policy <policy_id>"),
        },
        Some("record") => {
            if args.len() < 2 {
                bail!("usage: storesight record <insight text>");
            }
            tools.record_insight(&args[1..].join(" "))?
        }
        _ => bail!("usage: storesight <scan|audit|drill|policy|record> [args]"),
    };

    println!("{output}");
    Ok(())
}
