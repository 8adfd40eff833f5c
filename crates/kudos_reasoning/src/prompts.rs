//! Prompt text sent to the remote model.

/// Prompt asking for a JSON analysis of `story`.
pub fn story_analysis_prompt(story: &str) -> String {
    format!(
        r#"You are an expert psychologist, linguist and storyteller. Analyse the following story and extract:

1. Primary emotion (happy, sad, proud, stressed, excited, calm, angry, anxious, grateful, nostalgic, ...)
2. Emotion intensity from 1 to 10
3. The author's confidence from 1 to 10, judged from their language and self-perception
4. Story intent (achievement, pain, self-growth, creativity, reflection, challenge, celebration, ...)
5. Writing style (funny, poetic, casual, serious, thoughtful, dramatic, ...)
6. Dominant language (english, hindi, hindlish)
7. Three to five personality traits of the author
8. Overall tone (encouraging, melancholic, celebratory, contemplative, ...)
9. Two or three key themes
10. Narrative perspective (first person, third person, ...)
11. Temporal context (past, present, future)
12. Cultural context, or "general"

Story: "{story}"

Reply with JSON only, using exactly these keys:
{{
  "emotionLevel": "...",
  "emotionIntensity": 0,
  "confidenceLevel": 0,
  "storyIntent": "...",
  "writingStyle": "...",
  "languagePreference": "...",
  "personalityTraits": ["...", "..."],
  "tone": "...",
  "keyThemes": ["...", "..."],
  "narrativePerspective": "...",
  "temporalContext": "...",
  "culturalContext": "..."
}}

Numbers must be JSON numbers, not strings."#
    )
}

/// Prompt asking for a JSON description of an attached image or video.
pub fn media_analysis_prompt(mime_type: &str) -> String {
    format!(
        r#"Describe this {mime_type} in detail. Reply with JSON only, using exactly these keys:
{{
  "subjects": "main subjects, with specifics",
  "gender": "male|female|mixed|none",
  "peopleCount": "individual|smallGroup|largeGroup|none",
  "setting": "indoor|outdoor|nature|urban|beach|mountains|other",
  "activities": "what is happening",
  "mood": "overall emotional atmosphere",
  "elements": "notable visual elements, colours and lighting",
  "timeOfDay": "morning|afternoon|evening|night|unknown",
  "culturalContext": "cultural or regional indicators",
  "quality": "image quality assessment",
  "colors": ["color1", "color2", "color3"],
  "expressions": "facial expressions if visible",
  "objects": ["object1", "object2"],
  "weather": "sunny|cloudy|rainy|snowy|unknown"
}}

Use "unknown" for anything you cannot determine."#
    )
}
