//! Fixed prompt templates for the two supported answer languages.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    Bn,
}

impl Lang {
    /// Anything other than the exact tag `"bn"` selects English.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("bn") => Lang::Bn,
            _ => Lang::En,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Bn => "bn",
        }
    }
}

const SYSTEM_EN: &str = "You are InfoSeeker — a fact-focused assistant. Provide only verified or confidently known facts. If you are not confident, explicitly reply \"I am not certain\" and do not invent details. Give a concise answer (2-6 sentences), then a one-line \"How to verify:\" suggestion, and finally a 'Confidence:' label (High/Medium/Low).";

const SYSTEM_BN: &str = "তুমি InfoSeeker — একজন তথ্যভিত্তিক সহকারী। তুমি কেবল নিশ্চিত ও যাচাইযোগ্য তথ্য প্রদান করবে। যদি কোনো প্রশ্নের তথ্য সম্পর্কে তুমি নিশ্চিত না হও, তাহলে স্পষ্টভাবে বলো \"আমি নিশ্চিত নই\" এবং কোন কিছুও বানিয়ে বলবে না। উত্তর সংক্ষিপ্ত রকমে (২-৬ বাক্য), এরপর একটি লাইন লিখো 'How to verify:' (বাংলায়: 'যাচাই কিভাবে:') যেখানে ব্যবহারকারী কীভাবে যাচাই করবে সেটা সরলভাবে বলবে। শেষে একটি 'Confidence:' লেবেল দাও (High/Medium/Low)।";

pub fn system_prompt(lang: Lang) -> &'static str {
    match lang {
        Lang::En => SYSTEM_EN,
        Lang::Bn => SYSTEM_BN,
    }
}

pub fn user_prompt(lang: Lang, question: &str) -> String {
    match lang {
        Lang::En => format!("Question: {question}\n\nAnswer in English. Be concise."),
        Lang::Bn => format!("প্রশ্ন: {question}\n\nউত্তর বাংলা ভাষায় দাও। সংক্ষিপ্ত হও।"),
    }
}

// used when the model returns no content
pub fn no_answer(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "No answer available.",
        Lang::Bn => "উত্তর পাওয়া যায়নি।",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_parsing() {
        assert_eq!(Lang::from_tag(Some("bn")), Lang::Bn);
        assert_eq!(Lang::from_tag(Some("en")), Lang::En);
        assert_eq!(Lang::from_tag(Some("bn ")), Lang::En);
        assert_eq!(Lang::from_tag(None), Lang::En);
    }

    #[test]
    fn english_prompts() {
        let system = system_prompt(Lang::En);
        assert!(system.starts_with("You are InfoSeeker"));
        assert!(system.contains("How to verify:"));
        assert!(system.contains("Confidence:"));

        assert_eq!(
            user_prompt(Lang::En, "What is the capital of Bangladesh?"),
            "Question: What is the capital of Bangladesh?\n\nAnswer in English. Be concise."
        );
    }

    #[test]
    fn bengali_prompts() {
        let system = system_prompt(Lang::Bn);
        assert!(system.starts_with("তুমি InfoSeeker"));
        assert!(system.contains("Confidence:"));

        let user = user_prompt(Lang::Bn, "ঢাকা কোথায়?");
        assert!(user.starts_with("প্রশ্ন: ঢাকা কোথায়?\n\n"));
        assert!(user.ends_with("সংক্ষিপ্ত হও।"));
    }

    #[test]
    fn fallback_answers() {
        assert_eq!(no_answer(Lang::En), "No answer available.");
        assert_eq!(no_answer(Lang::Bn), "উত্তর পাওয়া যায়নি।");
    }
}
