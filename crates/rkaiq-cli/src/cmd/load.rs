use std::path::Path;

use anyhow::{Context, Result};
use rkaiq_build::{register_module_types, BuildEnv, ModuleTypeRegistry, BOARD_ENV};

use super::load_table;

pub fn run(
    module_type: &str,
    name: &str,
    board: &str,
    table: Option<&Path>,
    json: bool,
) -> Result<()> {
    let table = load_table(table)?;

    let mut registry = ModuleTypeRegistry::new();
    register_module_types(&mut registry)?;

    let mut module = registry
        .create(module_type, name)
        .with_context(|| format!("creating module {}", name))?;

    let env = BuildEnv::capture().with_var(BOARD_ENV, board);
    module.load(&env, &table);

    if json {
        println!("{}", serde_json::to_string_pretty(module.properties())?);
        return Ok(());
    }

    println!("{} ({:?})", module.name(), module.kind());
    for (scope, set) in module.properties().scopes() {
        println!("{}:", scope);
        for (field, items) in [
            ("cflags", &set.cflags),
            ("srcs", &set.srcs),
            ("static_libs", &set.static_libs),
        ] {
            if items.is_empty() {
                continue;
            }
            println!("  {}:", field);
            for item in items {
                println!("    {}", item);
            }
        }
    }

    Ok(())
}
