use anyhow::{bail, Result};
use tessera::gallery::{filtered_sequence, Gallery, TagFilter};

/// Print `<tag>\t<count>` for the universal tag and every tag in bar order.
pub fn cmd_tags(gallery: &Gallery) {
    for filter in gallery.tags().filters() {
        let count = filtered_sequence(gallery.items(), &filter).len();
        println!("{}\t{}", filter, count);
    }
}

pub fn cmd_list(gallery: &Gallery, tag: Option<&str>, json: bool) -> Result<()> {
    let filter = tag.map(TagFilter::parse).unwrap_or_default();
    if !gallery.tags().admits(&filter) {
        let known: Vec<&str> = gallery.tags().iter().collect();
        bail!("unknown tag '{}' (known: {})", filter, known.join(", "));
    }

    let items = filtered_sequence(gallery.items(), &filter);
    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    for item in items {
        let kind = if item.is_image() { "image" } else { "other" };
        println!(
            "{}\t{}\t{}\t{}",
            item.id,
            item.tag.as_deref().unwrap_or("-"),
            kind,
            item.src
        );
    }
    Ok(())
}
