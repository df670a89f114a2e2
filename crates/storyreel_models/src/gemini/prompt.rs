//! Prompt composition for the analysis and render calls.
//!
//! The gateway owns every word sent to the models. Analysis gets one
//! structured instruction block plus the raw script; renders get a single
//! concatenated prompt built from fixed clause tables. The language
//! contract (English `imagePrompt` fields, Korean everywhere else) lives
//! in the instruction text; it cannot be verified mechanically, only
//! stated emphatically.

use storyreel_core::{AnalyzeRequest, Era, ImageStyle, RenderRequest};

/// Hard single-person clause appended to portrait renders. The image model
/// happily invents companions without it.
const PORTRAIT_CLAUSE: &str = "A solo portrait of ONE SINGLE PERSON. ONLY ONE individual in \
     the frame. No groups, no crowds, no second person. Single subject only. Centered portrait, \
     looking at camera.";

/// Fixed trailing clause on every render.
const QUALITY_CLAUSE: &str = "South Korean character. High quality.";

/// Rendering-language descriptors for each visual style.
pub fn style_language(style: ImageStyle) -> &'static str {
    match style {
        ImageStyle::Cinematic => {
            "Photorealistic, cinematic lighting, 8k, highly detailed, realistic skin textures, \
             film grain."
        }
        ImageStyle::WebtoonAction => {
            "Modern manhwa style, sharp lines, vibrant colors, dynamic shading, aesthetic, high \
             contrast."
        }
        ImageStyle::WebtoonRomance => {
            "Soft manhwa style, pastel colors, sparkly eyes, emotional atmosphere, graceful \
             character designs, beautiful background wash."
        }
        ImageStyle::WebtoonThriller => {
            "Dark manhwa style, gritty textures, heavy shadows, suspenseful atmosphere, sharp \
             angles, muted color palette with high contrast."
        }
        ImageStyle::WebtoonYadam => {
            "Traditional Korean ink wash painting aesthetic combined with clean manhwa lines, \
             elegant, subtle traditional textures."
        }
    }
}

/// Era descriptor block for render prompts.
pub fn era_render_clause(era: Era) -> &'static str {
    match era {
        Era::Modern => {
            "Set in modern day South Korea, wearing modern trendy fashion, modern city background"
        }
        Era::Joseon => {
            "Set in Joseon Dynasty, wearing traditional Korean Hanbok, traditional Korean \
             architecture"
        }
    }
}

/// Era constraint block for the analysis instruction.
fn era_analysis_block(era: Era) -> &'static str {
    match era {
        Era::Modern => {
            "Strictly MODERN South Korean setting. Characters MUST wear MODERN fashion. \
             Architecture must be modern cityscapes/interiors."
        }
        Era::Joseon => {
            "Strictly JOSEON DYNASTY setting. Characters MUST wear TRADITIONAL Korean clothing \
             (Hanbok). Architecture must be traditional Hanok."
        }
    }
}

fn era_label(era: Era) -> &'static str {
    match era {
        Era::Modern => "MODERN DAY",
        Era::Joseon => "JOSEON DYNASTY PERIOD",
    }
}

/// The analysis instruction sent ahead of the raw script.
pub fn analysis_instruction(req: &AnalyzeRequest) -> String {
    format!(
        "Analyze the following Korean drama script set in the {era_label}.\n\
         \n\
         Task:\n\
         1. Identify the single most intense \"Climax\" scene.\n\
         2. Divide the rest of the story into exactly {chapters} key storyboard cuts.\n\
         3. Create a hooking headline (2 lines, concise, impactful Korean).\n\
         4. Identify the 2-3 most important main characters. For each character, provide a \
         detailed English \"imagePrompt\" that will generate a high-quality SOLO portrait \
         consistent with their description.\n\
         5. Define a visual style guide to maintain character consistency across separate \
         image generations.\n\
         \n\
         CRITICAL LANGUAGE RULE:\n\
         - The \"imagePrompt\" fields (for scenes AND characters) MUST be in English.\n\
         - ALL OTHER FIELDS (headline, characters.name, characters.description, \
         visualStyleGuide, title, summary, scriptSegment) MUST be written in KOREAN.\n\
         \n\
         For each storyboard cut and character:\n\
         - \"imagePrompt\": Detailed English prompt including specific physical features, \
         clothing, and mood.\n\
         - SETTING & CLOTHING: {era_block}\n\
         \n\
         Response must be valid JSON.",
        era_label = era_label(req.era),
        chapters = req.chapter_count,
        era_block = era_analysis_block(req.era),
    )
}

/// The final render prompt: subject, optional portrait clause, style
/// language, style guide, era clause, fixed quality clause, joined in that
/// order with blank clauses dropped.
pub fn render_prompt(req: &RenderRequest) -> String {
    let mut clauses: Vec<&str> = vec![req.subject_prompt.trim()];
    if req.portrait {
        clauses.push(PORTRAIT_CLAUSE);
    }
    clauses.push(style_language(req.style));
    let guide = req.style_guide.trim();
    if !guide.is_empty() {
        clauses.push(guide);
    }
    clauses.push(era_render_clause(req.era));
    clauses.push(QUALITY_CLAUSE);
    clauses
        .iter()
        .map(|clause| clause.trim_end_matches('.'))
        .collect::<Vec<_>>()
        .join(". ")
        + "."
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyreel_core::AspectRatio;

    fn request(portrait: bool) -> RenderRequest {
        RenderRequest::builder()
            .subject_prompt("A weathered detective in the rain".to_string())
            .style(ImageStyle::WebtoonThriller)
            .style_guide("Angular faces, cold blue palette".to_string())
            .era(Era::Modern)
            .aspect_ratio(AspectRatio::Wide)
            .portrait(portrait)
            .build()
            .unwrap()
    }

    #[test]
    fn portrait_clause_present_only_for_portraits() {
        assert!(render_prompt(&request(true)).contains("ONE SINGLE PERSON"));
        assert!(!render_prompt(&request(false)).contains("ONE SINGLE PERSON"));
    }

    #[test]
    fn clauses_appear_in_order() {
        let prompt = render_prompt(&request(false));
        let subject = prompt.find("weathered detective").unwrap();
        let style = prompt.find("Dark manhwa style").unwrap();
        let guide = prompt.find("cold blue palette").unwrap();
        let era = prompt.find("modern day South Korea").unwrap();
        let quality = prompt.find("High quality").unwrap();
        assert!(subject < style && style < guide && guide < era && era < quality);
    }

    #[test]
    fn blank_style_guide_is_dropped() {
        let mut req = request(false);
        req.style_guide = "   ".to_string();
        let prompt = render_prompt(&req);
        assert!(!prompt.contains(".  "));
        assert!(prompt.contains("Dark manhwa style"));
    }

    #[test]
    fn five_styles_have_distinct_language() {
        use strum::IntoEnumIterator;
        let mut seen = std::collections::HashSet::new();
        for style in ImageStyle::iter() {
            assert!(seen.insert(style_language(style)));
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn analysis_instruction_carries_chapter_count_and_era() {
        let req = AnalyzeRequest::builder()
            .script_text("대본".to_string())
            .chapter_count(4u32)
            .style(ImageStyle::Cinematic)
            .era(Era::Joseon)
            .build()
            .unwrap();
        let instruction = analysis_instruction(&req);
        assert!(instruction.contains("exactly 4 key storyboard cuts"));
        assert!(instruction.contains("JOSEON DYNASTY PERIOD"));
        assert!(instruction.contains("Hanbok"));
        assert!(instruction.contains("MUST be in English"));
        assert!(instruction.contains("KOREAN"));
    }
}
