//! The builtin symptom and condition dataset.

use crate::catalog::{Catalog, Condition, DietPlan, Severity, Symptom};

/// (id, name, category)
const SYMPTOMS: &[(&str, &str, &str)] = &[
    ("fever", "Fever", "General"),
    ("fatigue", "Fatigue", "General"),
    ("weakness", "Weakness", "General"),
    ("chills", "Chills", "General"),
    ("night_sweats", "Night Sweats", "General"),
    ("weight_loss", "Unexplained Weight Loss", "General"),
    ("cough", "Cough", "Respiratory"),
    ("sore_throat", "Sore Throat", "Respiratory"),
    ("runny_nose", "Runny Nose", "Respiratory"),
    ("shortness_breath", "Shortness of Breath", "Respiratory"),
    ("chest_congestion", "Chest Congestion", "Respiratory"),
    ("wheezing", "Wheezing", "Respiratory"),
    ("nausea", "Nausea", "Digestive"),
    ("vomiting", "Vomiting", "Digestive"),
    ("diarrhea", "Diarrhea", "Digestive"),
    ("constipation", "Constipation", "Digestive"),
    ("abdominal_pain", "Abdominal Pain", "Digestive"),
    ("bloating", "Bloating", "Digestive"),
    ("loss_appetite", "Loss of Appetite", "Digestive"),
    ("headache", "Headache", "Neurological"),
    ("dizziness", "Dizziness", "Neurological"),
    ("confusion", "Confusion", "Neurological"),
    ("numbness", "Numbness/Tingling", "Neurological"),
    ("memory_issues", "Memory Issues", "Neurological"),
    ("muscle_pain", "Muscle Pain", "Musculoskeletal"),
    ("joint_pain", "Joint Pain", "Musculoskeletal"),
    ("back_pain", "Back Pain", "Musculoskeletal"),
    ("stiffness", "Stiffness", "Musculoskeletal"),
    ("swelling", "Swelling", "Musculoskeletal"),
    ("rash", "Rash", "Skin"),
    ("itching", "Itching", "Skin"),
    ("dry_skin", "Dry Skin", "Skin"),
    ("skin_discoloration", "Skin Discoloration", "Skin"),
    ("chest_pain", "Chest Pain", "Cardiovascular"),
    ("palpitations", "Palpitations", "Cardiovascular"),
    ("high_bp", "High Blood Pressure", "Cardiovascular"),
    ("swollen_legs", "Swollen Legs", "Cardiovascular"),
];

struct ConditionEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    symptoms: &'static [&'static str],
    severity: Severity,
    recommended: &'static [&'static str],
    avoid: &'static [&'static str],
    tips: &'static [&'static str],
    duration: &'static str,
}

const CONDITIONS: &[ConditionEntry] = &[
    ConditionEntry {
        id: "common_cold",
        name: "Common Cold",
        description: "A viral infection of the upper respiratory tract. Usually harmless and resolves within 7-10 days.",
        symptoms: &["fever", "cough", "sore_throat", "runny_nose", "fatigue", "headache"],
        severity: Severity::Mild,
        recommended: &[
            "Warm chicken soup or vegetable broth",
            "Citrus fruits (oranges, lemons, grapefruits)",
            "Ginger tea with honey",
            "Garlic-rich foods",
            "Leafy green vegetables",
            "Warm water with lemon",
            "Probiotic-rich yogurt",
        ],
        avoid: &[
            "Dairy products (may increase mucus)",
            "Fried and fatty foods",
            "Sugary drinks and sodas",
            "Alcohol",
            "Processed foods",
            "Spicy foods (if sore throat)",
        ],
        tips: &[
            "Stay hydrated - drink 8-10 glasses of water daily",
            "Get plenty of rest (7-9 hours sleep)",
            "Use a humidifier to ease congestion",
            "Gargle with warm salt water for sore throat",
        ],
        duration: "7-10 days",
    },
    ConditionEntry {
        id: "flu",
        name: "Influenza (Flu)",
        description: "A contagious respiratory illness caused by influenza viruses. More severe than common cold.",
        symptoms: &["fever", "cough", "fatigue", "muscle_pain", "headache", "chills", "weakness"],
        severity: Severity::Moderate,
        recommended: &[
            "Clear broths and soups",
            "Bananas and bland fruits",
            "Rice and plain toast",
            "Electrolyte drinks",
            "Herbal teas (chamomile, peppermint)",
            "Lean proteins when appetite returns",
            "Vitamin C rich foods",
        ],
        avoid: &[
            "Heavy, greasy foods",
            "Caffeine",
            "Alcohol",
            "Sugary foods",
            "Raw vegetables (hard to digest)",
            "Spicy foods",
        ],
        tips: &[
            "Rest as much as possible",
            "Drink fluids every 15-20 minutes",
            "Eat small, frequent meals",
            "Monitor temperature and seek help if over 103°F",
        ],
        duration: "1-2 weeks",
    },
    ConditionEntry {
        id: "gastroenteritis",
        name: "Gastroenteritis (Stomach Flu)",
        description: "Inflammation of the stomach and intestines, usually caused by viral or bacterial infection.",
        symptoms: &[
            "nausea",
            "vomiting",
            "diarrhea",
            "abdominal_pain",
            "fever",
            "fatigue",
            "loss_appetite",
        ],
        severity: Severity::Moderate,
        recommended: &[
            "BRAT diet: Bananas, Rice, Applesauce, Toast",
            "Clear broths",
            "Oral rehydration solutions",
            "Crackers and pretzels",
            "Boiled potatoes",
            "Plain pasta",
            "Lean chicken (when recovering)",
        ],
        avoid: &[
            "Dairy products",
            "Fatty and fried foods",
            "Caffeine",
            "Alcohol",
            "Raw fruits and vegetables",
            "Spicy foods",
            "Acidic foods",
        ],
        tips: &[
            "Stay hydrated - small sips frequently",
            "Start with ice chips if vomiting persists",
            "Gradually reintroduce solid foods",
            "Wash hands frequently to prevent spread",
        ],
        duration: "3-7 days",
    },
    ConditionEntry {
        id: "migraine",
        name: "Migraine",
        description: "A neurological condition causing intense, debilitating headaches often with other symptoms.",
        symptoms: &["headache", "nausea", "dizziness", "fatigue", "numbness", "weakness"],
        severity: Severity::Moderate,
        recommended: &[
            "Magnesium-rich foods (spinach, almonds)",
            "Omega-3 fatty acids (salmon, sardines)",
            "Riboflavin-rich foods (eggs, lean meats)",
            "Fresh fruits (non-citrus)",
            "Whole grains",
            "Ginger tea",
            "Plenty of water",
        ],
        avoid: &[
            "Aged cheeses",
            "Processed meats",
            "Chocolate (for some)",
            "Alcohol, especially red wine",
            "MSG-containing foods",
            "Artificial sweeteners",
            "Caffeine (limit or avoid)",
        ],
        tips: &[
            "Maintain regular meal times",
            "Keep a food diary to identify triggers",
            "Stay well-hydrated",
            "Get adequate sleep",
            "Rest in a dark, quiet room during attacks",
        ],
        duration: "Ongoing management",
    },
    ConditionEntry {
        id: "arthritis",
        name: "Arthritis",
        description: "Inflammation of one or more joints, causing pain and stiffness that can worsen with age.",
        symptoms: &["joint_pain", "stiffness", "swelling", "fatigue", "weakness", "muscle_pain"],
        severity: Severity::Moderate,
        recommended: &[
            "Fatty fish (salmon, mackerel, sardines)",
            "Olive oil (extra virgin)",
            "Berries and cherries",
            "Leafy greens (spinach, kale)",
            "Nuts (walnuts, almonds)",
            "Beans and lentils",
            "Turmeric and ginger",
        ],
        avoid: &[
            "Processed and fried foods",
            "Sugary foods and drinks",
            "Red meat (limit)",
            "Refined carbohydrates",
            "Alcohol",
            "Salt (excess)",
            "Omega-6 fatty acids (corn oil, soybean oil)",
        ],
        tips: &[
            "Maintain a healthy weight",
            "Stay active with low-impact exercises",
            "Apply heat or cold therapy",
            "Consider anti-inflammatory supplements (consult doctor)",
        ],
        duration: "Ongoing management",
    },
    ConditionEntry {
        id: "allergies",
        name: "Allergic Reaction",
        description: "Immune system response to substances that are usually harmless.",
        symptoms: &["rash", "itching", "runny_nose", "shortness_breath", "swelling", "fatigue"],
        severity: Severity::Mild,
        recommended: &[
            "Quercetin-rich foods (onions, apples)",
            "Vitamin C rich foods (bell peppers, broccoli)",
            "Probiotic foods (yogurt, kefir)",
            "Local honey",
            "Green tea",
            "Omega-3 fatty acids",
            "Pineapple (contains bromelain)",
        ],
        avoid: &[
            "Known allergens",
            "Histamine-rich foods (aged cheese, alcohol)",
            "Processed foods with additives",
            "Artificial colors and preservatives",
            "Foods cross-reactive with your allergens",
        ],
        tips: &[
            "Keep an allergy diary",
            "Read food labels carefully",
            "Carry antihistamines if prescribed",
            "Seek emergency help for severe reactions",
        ],
        duration: "Ongoing management",
    },
    ConditionEntry {
        id: "hypertension",
        name: "Hypertension (High Blood Pressure)",
        description: "A condition where blood pressure against artery walls is consistently too high.",
        symptoms: &[
            "high_bp",
            "headache",
            "dizziness",
            "chest_pain",
            "shortness_breath",
            "fatigue",
        ],
        severity: Severity::Moderate,
        recommended: &[
            "DASH diet foods",
            "Potassium-rich foods (bananas, potatoes)",
            "Leafy greens",
            "Berries",
            "Fatty fish",
            "Oatmeal and whole grains",
            "Garlic",
            "Beets",
        ],
        avoid: &[
            "Salt and high-sodium foods",
            "Processed and canned foods",
            "Red meat",
            "Sugary beverages",
            "Alcohol (limit)",
            "Caffeine (limit)",
            "Fried foods",
        ],
        tips: &[
            "Monitor blood pressure regularly",
            "Exercise for 30 minutes daily",
            "Maintain healthy weight",
            "Reduce stress",
            "Limit sodium to 1500mg/day",
        ],
        duration: "Ongoing management",
    },
    ConditionEntry {
        id: "bronchitis",
        name: "Bronchitis",
        description: "Inflammation of the bronchial tubes that carry air to your lungs.",
        symptoms: &[
            "cough",
            "chest_congestion",
            "fatigue",
            "shortness_breath",
            "wheezing",
            "fever",
            "chills",
        ],
        severity: Severity::Moderate,
        recommended: &[
            "Warm liquids (herbal tea, broth)",
            "Honey (natural cough suppressant)",
            "Ginger and turmeric",
            "Citrus fruits",
            "Leafy greens",
            "Garlic",
            "Almonds and nuts",
        ],
        avoid: &[
            "Dairy products",
            "Fried foods",
            "Processed foods",
            "Sugary foods",
            "Cold drinks",
            "Alcohol",
            "Caffeine",
        ],
        tips: &[
            "Use a humidifier",
            "Avoid smoke and irritants",
            "Rest your voice",
            "Sleep with head elevated",
            "Stay hydrated",
        ],
        duration: "2-3 weeks",
    },
    ConditionEntry {
        id: "food_poisoning",
        name: "Food Poisoning",
        description: "Illness caused by eating contaminated food with bacteria, viruses, or parasites.",
        symptoms: &[
            "nausea",
            "vomiting",
            "diarrhea",
            "abdominal_pain",
            "fever",
            "weakness",
            "loss_appetite",
        ],
        severity: Severity::Moderate,
        recommended: &[
            "Clear fluids initially",
            "Oral rehydration solutions",
            "BRAT diet when tolerated",
            "Plain crackers",
            "Clear broths",
            "Ice chips",
            "Coconut water",
        ],
        avoid: &[
            "Solid foods initially",
            "Dairy products",
            "Fatty foods",
            "Spicy foods",
            "Caffeine",
            "Alcohol",
            "Raw foods",
        ],
        tips: &[
            "Rest and stay hydrated",
            "Start with small sips of liquid",
            "Gradually introduce bland foods",
            "Seek medical help if symptoms persist 48+ hours",
        ],
        duration: "1-3 days",
    },
    ConditionEntry {
        id: "anemia",
        name: "Anemia",
        description: "A condition where you lack enough healthy red blood cells to carry adequate oxygen.",
        symptoms: &[
            "fatigue",
            "weakness",
            "dizziness",
            "shortness_breath",
            "chest_pain",
            "headache",
            "numbness",
        ],
        severity: Severity::Moderate,
        recommended: &[
            "Iron-rich foods (red meat, liver)",
            "Dark leafy greens (spinach, kale)",
            "Legumes (lentils, beans)",
            "Fortified cereals",
            "Vitamin C foods (to enhance iron absorption)",
            "Eggs",
            "Dried fruits (raisins, apricots)",
        ],
        avoid: &[
            "Tea and coffee with meals (inhibit iron absorption)",
            "Calcium-rich foods during iron intake",
            "Processed foods",
            "Excessive fiber during iron absorption",
            "Alcohol",
        ],
        tips: &[
            "Pair iron-rich foods with vitamin C",
            "Cook in cast iron pans",
            "Take iron supplements as prescribed",
            "Get regular blood tests",
            "Avoid antacids near iron intake",
        ],
        duration: "Ongoing management",
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build an owned copy of the builtin dataset.
///
/// Prefer [`Catalog::builtin`], which builds it once per process.
pub fn catalog() -> Catalog {
    let symptoms = SYMPTOMS
        .iter()
        .map(|&(id, name, category)| Symptom::new(id, name, category))
        .collect();

    let conditions = CONDITIONS
        .iter()
        .map(|entry| Condition {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            symptoms: owned(entry.symptoms),
            severity: entry.severity,
            diet_plan: DietPlan {
                recommended: owned(entry.recommended),
                avoid: owned(entry.avoid),
                tips: owned(entry.tips),
                duration: entry.duration.to_string(),
            },
        })
        .collect();

    Catalog::new(symptoms, conditions)
}
