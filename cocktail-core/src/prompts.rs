//! Cocktail suggestion prompt.

/// Prompt name for logs and cache organization.
pub const COCKTAIL_PROMPT_NAME: &str = "cocktail_suggestions";

/// What the model is told to answer when nothing can be made.
pub const NO_MATCH_REPLY: &str =
    "No cocktails can be made with the provided ingredients and preferences.";

const NO_PREFERENCE: &str = "No particular preference.";

/// Render the suggestion prompt for a mood/preference and a list of ingredients.
pub fn render_cocktail_prompt(prompt: &str, ingredients: &[String]) -> String {
    let prompt = match prompt.trim() {
        "" => NO_PREFERENCE,
        p => p,
    };
    let ingredients = ingredients.join(", ");

    format!(
        r#"You are an expert cocktail assistant.

User prompt: {prompt}
User has the following ingredients: {ingredients}

Based on both the user's preferences and ingredients:
1. Suggest classic cocktails that can be made using ONLY the ingredients and match the user's request.

2. For each cocktail, output:
- Cocktail Name
- List of ingredients with measurements
- Instructions for preparation

3. Format the response as a clear list.

If no cocktails match, reply: "{no_match}""#,
        prompt = prompt,
        ingredients = ingredients,
        no_match = NO_MATCH_REPLY
    )
}
