//! Prompt templates.

pub(crate) const POST_SYSTEM_PROMPT: &str = "You are an expert healthcare AI blog writer.";
pub(crate) const TOPIC_SYSTEM_PROMPT: &str = "You are a healthcare content strategist.";

/// Make user text safe to embed inside a quoted prompt string.
pub fn sanitize(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace(['\n', '\r'], " ")
        .trim()
        .to_string()
}

pub fn post_prompt(topic: &str, company: &str, keywords: &[String]) -> String {
    [
        format!(
            "Write a comprehensive blog post about \"{}\" for a healthcare AI company called {}.",
            sanitize(topic),
            company
        ),
        String::new(),
        format!("Use these keywords where relevant: {}.", keywords.join(", ")),
        String::new(),
        "Requirements:".to_string(),
        "- 1200 to 1500 words".to_string(),
        "- Use <h1>, <h2>, <p>, <ul> only".to_string(),
        "- No external styles".to_string(),
        String::new(),
        "Sections:".to_string(),
        "1. Introduction".to_string(),
        "2. Key Insights".to_string(),
        "3. Real-world Impact".to_string(),
        "4. Conclusion".to_string(),
        String::new(),
        "At the end, include: <p><strong>Tags:</strong> tag1, tag2, tag3</p>".to_string(),
    ]
    .join("\n")
}

pub fn topic_prompt(theme: &str, keywords: &[String]) -> String {
    [
        format!(
            "Generate 1 focused blog topic based on the theme: \"{}\".",
            sanitize(theme)
        ),
        String::new(),
        "Requirements:".to_string(),
        "1. Maximum 10 words".to_string(),
        "2. Must be specific and relevant to healthcare AI".to_string(),
        format!(
            "3. Include one of these keywords if possible: {}",
            keywords.join(", ")
        ),
        String::new(),
        "Return ONLY the topic text.".to_string(),
    ]
    .join("\n")
}

/// Trim a model reply down to the bare phrase: surrounding whitespace and one
/// leading and one trailing quote character are dropped.
pub fn clean_phrase(raw: &str) -> String {
    const QUOTES: [char; 3] = ['"', '\'', '`'];

    let phrase = raw.trim();
    let phrase = phrase.strip_prefix(QUOTES).unwrap_or(phrase);
    let phrase = phrase.strip_suffix(QUOTES).unwrap_or(phrase);
    phrase.trim().to_string()
}
