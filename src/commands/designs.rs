use anyhow::Result;
use clap::Args;
use cutbox::DesignKind;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct DesignsArgs {
    /// Print the list as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct DesignInfo {
    tag: &'static str,
    description: &'static str,
    required: &'static [&'static str],
    defaults: toml::Table,
}

pub fn execute(args: DesignsArgs) -> Result<()> {
    let designs: Vec<DesignInfo> = DesignKind::ALL
        .into_iter()
        .map(|kind| DesignInfo {
            tag: kind.tag(),
            description: kind.description(),
            required: kind.required_keys(),
            defaults: kind.defaults(),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&designs)?);
        return Ok(());
    }

    for design in &designs {
        println!("{:<10} {}", design.tag, design.description);
        println!("{:<10} required: {}", "", design.required.join(", "));
        for (key, value) in &design.defaults {
            println!("{:<10} {} = {}", "", key, value);
        }
    }
    Ok(())
}
