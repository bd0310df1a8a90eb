use log::debug;
use std::env;

use recipe_analyzer::{
    classify_message, read_recipe, substitutions, AnalyzerConfig, InMemoryKnowledge,
    RecipeAnalyzer,
};

const USAGE: &str = "Usage: recipe-analyzer <file|-> [mode] | --tips [category] | --ask <question> | --substitute <ingredient>";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the recipe source and optional analysis type from command-line arguments
    let args: Vec<String> = env::args().collect();
    let source = args.get(1).ok_or(USAGE)?;

    let config = AnalyzerConfig::load()?;
    debug!("{:#?}", config);

    match source.as_str() {
        "--tips" => {
            let category = args.get(2).map(String::as_str);
            let tips = RecipeAnalyzer::tips(&config, category, &InMemoryKnowledge::basic())?;
            println!("{}", serde_json::to_string_pretty(&tips)?);
        }
        "--ask" => {
            let question = args.get(2).ok_or(USAGE)?;
            println!("{}", classify_message(question));
        }
        "--substitute" => {
            let ingredient = args.get(2).ok_or(USAGE)?;
            let substitutes = substitutions(ingredient, &InMemoryKnowledge::basic())?;
            println!("{}", serde_json::to_string_pretty(&substitutes)?);
        }
        _ => {
            let text = read_recipe(source)?;

            let mut builder = RecipeAnalyzer::builder().text(text).config(config);
            if let Some(analysis_type) = args.get(2) {
                builder = builder.analysis_type(analysis_type.as_str());
            }

            println!("{}", builder.build()?.to_json()?);
        }
    }

    Ok(())
}
