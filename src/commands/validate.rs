//! Check posts against the authoring rules

use anyhow::Result;

use super::print_json;
use crate::content::validate::validate_store;
use crate::Blog;

/// Report rule violations. Fails when any are found.
pub fn run(blog: &Blog, json: bool) -> Result<()> {
    let violations = validate_store(&blog.store, &blog.config.validation);

    if json {
        print_json(&violations)?;
    } else {
        for violation in &violations {
            println!("  {}", violation);
        }
    }

    if !violations.is_empty() {
        anyhow::bail!("{} rule violations found", violations.len());
    }

    if !json {
        println!("All {} posts are valid", blog.store.len());
    }
    Ok(())
}
