//! Loads a gallery of gestures from a RON file, registers the templates and
//! classifies every query in it.
//!
//! cargo run --example classify-demo --features serde [gestures.ron]

use p_recognizer::{ClassifyResult, Listeners, Recognizer, Stroke};
use ron::ser::{to_string_pretty, PrettyConfig};
use serde_derive::Deserialize;
use std::{error::Error, fs};

#[derive(Deserialize)]
struct Sample {
    name: String,
    strokes: Vec<Stroke>,
}

#[derive(Deserialize)]
struct GestureFile {
    templates: Vec<Sample>,
    queries: Vec<Sample>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/demos/gestures.ron").to_owned());
    let file: GestureFile = ron::from_str(&fs::read_to_string(&path)?)?;

    let mut recognizer = Recognizer::new();
    let mut listeners = Listeners::new();
    for template in &file.templates {
        recognizer.add_template(&template.name, &template.strokes)?;
        let name = template.name.clone();
        listeners.on(&template.name, move |score| {
            println!("  listener for '{}' fired with {:.3}", name, score)
        });
    }
    println!("{} templates loaded from {}", recognizer.len(), path);

    for query in &file.queries {
        let result = recognizer.classify(&query.strokes)?;
        match &result {
            ClassifyResult::Match { name, score, distance } => println!(
                "{}: {} (score {:.3}, distance {:.3})",
                query.name, name, score, distance
            ),
            other => println!("{}: {}", query.name, to_string_pretty(other, PrettyConfig::default())?),
        }
        listeners.dispatch(&result);
    }
    Ok(())
}
