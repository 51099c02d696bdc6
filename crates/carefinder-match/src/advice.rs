use serde::Serialize;

/// Home-care guidance for a common complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareAdvice {
    pub topic: &'static str,
    /// Related symptoms worth asking about next.
    pub followup: &'static str,
    pub advice: &'static [&'static str],
}

const ADVICE: &[CareAdvice] = &[
    CareAdvice {
        topic: "fever",
        followup: "cold, cough, headache, or body pain",
        advice: &[
            "Drink plenty of fluids to stay hydrated.",
            "Rest as much as possible.",
            "Use a warm sponge if temperature is high.",
            "Eat light, easy-to-digest foods.",
        ],
    },
    CareAdvice {
        topic: "cold",
        followup: "fever, sore throat, or headache",
        advice: &[
            "Steam inhalation can help clear congestion.",
            "Drink warm water or herbal tea.",
            "Avoid cold foods and drinks.",
            "Salt water gargle for sore throat.",
        ],
    },
    CareAdvice {
        topic: "cough",
        followup: "fever, cold, or breathing difficulty",
        advice: &[
            "Drink warm fluids like soup or tea.",
            "Honey with warm water can soothe the throat.",
            "Elevate your head while sleeping.",
            "Avoid irritants like smoke or dust.",
        ],
    },
    CareAdvice {
        topic: "headache",
        followup: "fever, vision issues, or nausea",
        advice: &[
            "Rest in a quiet, dark room.",
            "Stay hydrated.",
            "Apply a cold or warm compress to your forehead.",
            "Practice gentle neck stretches.",
        ],
    },
    CareAdvice {
        topic: "pain",
        followup: "swelling, redness, or fever",
        advice: &[
            "Rest the affected area.",
            "Apply ice for acute injury, heat for muscle stiffness.",
            "Avoid strenuous activity.",
        ],
    },
    CareAdvice {
        topic: "stomach",
        followup: "vomiting, fever, or loose motion",
        advice: &[
            "Drink lots of fluids (ORS is good).",
            "Eat the BRAT diet (Bananas, Rice, Applesauce, Toast).",
            "Avoid spicy, oily, or dairy foods.",
        ],
    },
];

/// First complaint (in table order) mentioned in `text`.
pub fn home_care_advice(text: &str) -> Option<&'static CareAdvice> {
    let lowered = text.to_lowercase();
    ADVICE.iter().find(|a| lowered.contains(a.topic))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_topic_in_table_order_wins() {
        let a = home_care_advice("Headache and FEVER since morning").expect("advice");
        assert_eq!(a.topic, "fever");
        assert_eq!(a.advice.len(), 4);
    }

    #[test]
    fn nothing_for_unrelated_text() {
        assert!(home_care_advice("book an appointment").is_none());
    }
}
