/// Canned reply texts.
/// Bodies never carry the closing disclaimer; `with_disclaimer` adds it.

pub const DISCLAIMER: &str = "⚠️ Please consult a doctor before following this advice.";

pub const EMERGENCY_NUMBER: &str = "108";
pub const HEALTH_HELPLINE: &str = "104";

pub const HOSPITALS_URL: &str = "https://www.google.com/maps/search/hospital+near+me";
pub const PHARMACIES_URL: &str = "https://www.google.com/maps/search/pharmacy+near+me";
pub const CLINICS_URL: &str = "https://www.google.com/maps/search/clinic+near+me";
pub const WHO_URL: &str = "https://www.who.int";

pub const GREETING: &str = "🙏 Welcome to AYURAKSHAK! I'm your AI health assistant. How can I help you today?\n\n\
⚠️ Remember: I provide general health information only. Please consult a doctor for proper medical advice.";

pub const SHARING_LOCATION: &str = "📍 Sharing location...";

pub fn with_disclaimer(body: &str) -> String {
    format!("{}\n\n{}", body.trim_end(), DISCLAIMER)
}

pub fn emergency() -> String {
    format!(
        "🚨 EMERGENCY DETECTED!\n\n\
        Immediate Actions:\n\
        📞 Call {EMERGENCY_NUMBER} (Emergency)\n\
        📞 Call {HEALTH_HELPLINE} (Health Helpline)\n\
        🏥 Visit nearest hospital\n\n\
        📍 Find hospitals near you: {HOSPITALS_URL}\n\n\
        ⚠️ Please seek immediate medical attention."
    )
}

pub fn pain() -> String {
    format!(
        "I understand you're experiencing pain. Here's what you can do:\n\n\
        💊 For mild pain:\n\
        • Rest the affected area\n\
        • Apply ice/heat as appropriate\n\
        • Take over-the-counter pain relief if suitable\n\n\
        📞 Call {HEALTH_HELPLINE} (Health Helpline) for guidance\n\
        🏥 If severe, visit: {HOSPITALS_URL}"
    )
}

pub fn fever() -> String {
    format!(
        "For fever management:\n\n\
        🌡️ Monitor temperature regularly\n\
        💧 Stay hydrated - drink plenty of fluids\n\
        🛌 Get adequate rest\n\
        🍯 Consider lukewarm water with honey\n\n\
        ⚠️ If fever >101°F (38.3°C) or persists >3 days, consult a doctor immediately.\n\n\
        📞 Health Helpline: {HEALTH_HELPLINE}"
    )
}

pub fn garlic_myth() -> String {
    format!(
        "⚠️ MYTH BUSTER ALERT!\n\n\
        Garlic does NOT cure serious diseases like TB, COVID, or cancer. \
        While garlic has some health benefits, it cannot replace proper medical treatment.\n\n\
        📚 Official guidelines: {WHO_URL}\n\
        💊 Always follow prescribed medications\n\
        👨‍⚕️ Consult healthcare professionals"
    )
}

pub fn cough_cold() -> String {
    format!(
        "For cough and cold relief:\n\n\
        🍵 Warm liquids (herbal tea, warm water)\n\
        🍯 Honey with lukewarm water\n\
        💨 Steam inhalation\n\
        🛌 Adequate rest\n\
        😷 Wear mask to prevent spread\n\n\
        ⚠️ If cough persists >2 weeks or has blood, see a doctor immediately.\n\n\
        📞 Health Helpline: {HEALTH_HELPLINE}"
    )
}

pub fn general(user_message: &str) -> String {
    format!(
        "Thank you for your message: \"{user_message}\"\n\n\
        I'm here to help with health-related questions. You can ask me about:\n\n\
        🤒 Common symptoms (fever, cough, pain)\n\
        💊 General health advice\n\
        🚨 Emergency guidance\n\
        🏥 Finding nearby hospitals\n\n\
        What specific health concern can I help you with?"
    )
}

pub fn file_uploaded(file_name: &str) -> String {
    format!("📎 Uploaded: {file_name}")
}

pub fn file_received(file_name: &str) -> String {
    with_disclaimer(&format!(
        "I received your file: \"{file_name}\". I can help analyze medical reports and prescriptions.\n\n\
        📋 For prescription analysis, I can explain:\n\
        • Dosage instructions\n\
        • Medicine timing\n\
        • Possible side effects\n\n\
        📊 For lab reports, I can help interpret basic values."
    ))
}

pub fn location_received() -> String {
    with_disclaimer(&format!(
        "📍 Location received!\n\n\
        Finding nearby healthcare facilities:\n\
        🏥 Hospitals: {HOSPITALS_URL}\n\
        💊 Pharmacies: {PHARMACIES_URL}\n\
        🩺 Clinics: {CLINICS_URL}\n\n\
        📞 Emergency: {EMERGENCY_NUMBER}\n\
        📞 Health Helpline: {HEALTH_HELPLINE}"
    ))
}
