use anyhow::Result;
use clap::ArgMatches;

use crate::core::readers::{self, DocumentKind};
use crate::ui::format_document;

/// Print one document, or every document when `kind` is `None`
pub fn execute(kind: Option<DocumentKind>, matches: &ArgMatches) -> Result<()> {
    let platform = super::host_platform()?;
    let json_output = matches.get_flag("json");

    let kinds: Vec<DocumentKind> = match kind {
        Some(kind) => vec![kind],
        None => DocumentKind::ALL.to_vec(),
    };

    for kind in kinds {
        let doc = readers::read(kind, platform.as_ref());
        if json_output {
            println!("{}", doc.to_json_or_empty());
        } else {
            format_document(kind, &doc);
        }
    }

    if !json_output {
        println!();
    }
    Ok(())
}
