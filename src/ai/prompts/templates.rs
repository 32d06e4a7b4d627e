use crate::strategy::Strategy;

/// Generate a prompt asking for a numbered list of post ideas.
pub fn post_ideas_prompt(strategy: &Strategy, count: usize) -> String {
    format!(
        r#"Based on the following marketing strategy for an app called '{app_name}', generate a list of exactly {count} engaging social media post ideas.
The target audience is: {audience}.
The content should revolve around these pillars: {pillars}.

Return the response as a numbered list of one-sentence ideas. For example:
1. A quick tip on how teachers can use technology in the classroom.
2. Explaining the importance of parent-teacher meetings."#,
        app_name = strategy.app_name,
        audience = strategy.target_audience,
        pillars = strategy.pillars_joined(),
    )
}

/// Generate a prompt asking for a complete caption for one post idea.
pub fn caption_prompt(strategy: &Strategy, idea: &str) -> String {
    format!(
        r#"You are the social media manager for '{app_name}'. Your brand voice is: '{voice}'.
Write a complete, engaging social media caption based on this idea: "{idea}".

The caption should be clear, helpful, and directly address the target audience: {audience}.
Include relevant hashtags. Do not include the original idea in the response."#,
        app_name = strategy.app_name,
        voice = strategy.brand_voice,
        audience = strategy.target_audience,
    )
}

/// Generate the descriptive prompt handed to the image backend.
pub fn image_prompt(idea: &str, visual_style: &str) -> String {
    format!(
        "Create an image for a social media post about '{idea}'. The visual style should be: '{visual_style}'"
    )
}
