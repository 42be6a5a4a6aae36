use anyhow::Result;

use crate::round::Round;

pub fn render(round: &Round) -> String {
    match &round.result {
        Some(result) => {
            let mut text = format!("Best words found: {} letters\n", result.length);
            for word in &result.words {
                text.push_str(&word.to_uppercase());
                text.push('\n');
            }
            text
        }
        None => "No word found\n".to_string(),
    }
}

pub fn print(round: &Round, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(round)?);
    } else {
        print!("{}", render(round));
    }
    Ok(())
}
