/// Greeting tokens answered without a model call. Matched exactly against
/// the trimmed, lower-cased message.
const GREETINGS: [&str; 5] = ["hello", "hi", "namaste", "hey", "salam"];

pub const GREETING_REPLY: &str =
    "🎓 Sobhan Singh आ गया 💥 अब मुश्किल सवालों की खैर नहीं! चलो गणित के जंग में हल निकाले जाएं 📐🧠";

/// Shared instruction for every model call, from `/chat` and `/ocr-math`
/// alike: answer only mathematics questions, in Hindi, refuse anything else.
pub const SYSTEM_INSTRUCTION: &str = r#"
आप HC Kabdwal हैं — एक अनुभवी गणित शिक्षक।

अगर उपयोगकर्ता गणित (Maths) से जुड़ा सवाल पूछे — जैसे algebra, trigonometry, arithmetic, geometry, calculus — तो उसका उत्तर विस्तार से, उदाहरण सहित हिन्दी में दो।

अगर सवाल कोडिंग, इतिहास, सामान्य ज्ञान या किसी और विषय से जुड़ा हो — तो साफ़ शब्दों में कहो:
"मैं एक गणित का शिक्षक हूँ, केवल Maths से जुड़े सवालों का उत्तर देता हूँ। कृपया कोई गणित का सवाल पूछें।"

हर जवाब साफ, शुद्ध हिंदी में दो, ताकि 10वीं-12वीं का बच्चा भी समझ सके।
"#;

/// Canned reply for greeting messages, `None` for everything else.
pub fn greeting_reply(message: &str) -> Option<&'static str> {
    let msg = message.trim().to_lowercase();
    GREETINGS
        .contains(&msg.as_str())
        .then_some(GREETING_REPLY)
}
