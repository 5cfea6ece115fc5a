//! Basic usage of the lexpace API

use lexpace_api::{tag_text, Config, TokenTagger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Convenience function ===");
    let response = tag_text("Hello, world! We flew to Lisbon yesterday.")?;
    for (token, group) in response.tokens.iter().zip(&response.groups) {
        println!("  {token:<12} {group}");
    }

    println!("\n=== Pre-annotated CoNLL-U with Penn tags ===");
    let config = Config::builder()
        .annotator("conllu")?
        .rule_set("penn")
        .xpos(true)
        .build()?;
    let tagger = TokenTagger::with_config(config)?;

    let doc = "1\tIt\tit\tPRON\tPRP\t_\t2\tnsubj\t_\t_\n\
2\trains\train\tVERB\tVBZ\t_\t0\troot\t_\t_\n\
3\t.\t.\tPUNCT\t.\t_\t2\tpunct\t_\t_\n";
    let output = tagger.process_text(doc)?;
    for (token, group) in output.iter() {
        println!("  {token:<12} {group}");
    }
    println!(
        "{} annotated tokens -> {} display units in {:.3}ms",
        output.metadata.annotated_tokens,
        output.metadata.merged_tokens,
        output.metadata.processing_time_ms
    );

    Ok(())
}
