//! `keymint generate`: print fresh identifiers.

use crate::config::Layout;
use crate::context::ServiceContext;
use crate::generator::IdentifierGenerator;
use crate::identifier::Identifier;

/// Generate `count` identifiers from `ctx` and print them.
///
/// # Errors
///
/// Returns an error string if generation fails; nothing is printed then.
pub fn run(ctx: ServiceContext, count: usize, layout: Layout, json: bool) -> Result<(), String> {
    let generator = IdentifierGenerator::new(ctx, layout);
    let ids = generator.generate_batch(count).map_err(|e| e.to_string())?;
    let rendered = render(&ids, json)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

/// Render identifiers one per line, or as a JSON array.
fn render(ids: &[Identifier], json: bool) -> Result<String, String> {
    if json {
        serde_json::to_string(ids).map_err(|e| format!("Failed to encode identifiers: {e}"))
    } else {
        Ok(ids.iter().map(Identifier::as_str).collect::<Vec<_>>().join("\n"))
    }
}
