//! Built-in survey code tables.
//!
//! Column codes and response strings as they appear in the digital
//! exclusion survey export, paired with the short labels the charts show.

/// Government region of the respondent.
pub const REGION_COLUMN: &str = "brk_government_region";

/// Banded age of the respondent.
pub const AGE_COLUMN: &str = "cage2";

/// Household income band.
pub const INCOME_COLUMN: &str = "q11";

pub const AGE_BANDS: &[&str] = &["16-24", "25-34", "35-44", "45-54", "55-64", "65+"];

/// Raw income responses to band labels.
///
/// Exports saved with the wrong code page carry U+FFFD in place of the
/// pound sign; both spellings map to the same band. The "v699" typo is in
/// the questionnaire itself.
pub const INCOME_BANDS: &[(&str, &str)] = &[
    (
        "Up to £199 per week / Up to £10,399 per year",
        "£0-£10,399",
    ),
    (
        "Up to \u{FFFD}199 per week / Up to \u{FFFD}10,399 per year",
        "£0-£10,399",
    ),
    (
        "£200 to £299 per week / £10,400 to £15,599 per year",
        "£10,400-£15,599",
    ),
    (
        "\u{FFFD}200 to \u{FFFD}299 per week / \u{FFFD}10,400 to \u{FFFD}15,599 per year",
        "£10,400-£15,599",
    ),
    (
        "£300 to £499 per week / £15,600 to £25,999 per year",
        "£15,600-£25,999",
    ),
    (
        "\u{FFFD}300 to \u{FFFD}499 per week / \u{FFFD}15,600 to \u{FFFD}25,999 per year",
        "£15,600-£25,999",
    ),
    (
        "£500 to v699 per week / £26,000 to £36,399 per year",
        "£26,000-£36,399",
    ),
    (
        "£500 to £699 per week / £26,000 to £36,399 per year",
        "£26,000-£36,399",
    ),
    (
        "\u{FFFD}500 to v699 per week / \u{FFFD}26,000 to \u{FFFD}36,399 per year",
        "£26,000-£36,399",
    ),
    (
        "£700 to £999 per week / £36,400 to £51,999 per year",
        "£36,400-£51,999",
    ),
    (
        "\u{FFFD}700 to \u{FFFD}999 per week / \u{FFFD}36,400 to \u{FFFD}51,999 per year",
        "£36,400-£51,999",
    ),
    (
        "£1,000 and above per week / £52,000 and above per year",
        "£52,000+",
    ),
    (
        "\u{FFFD}1,000 and above per week / \u{FFFD}52,000 and above per year",
        "£52,000+",
    ),
    ("Don't know", "Don't know"),
    ("Prefer not to say", "Prefer not to say"),
];

pub const INCOME_ORDER: &[&str] = &[
    "£0-£10,399",
    "£10,400-£15,599",
    "£15,600-£25,999",
    "£26,000-£36,399",
    "£36,400-£51,999",
    "£52,000+",
    "Don't know",
    "Prefer not to say",
];

pub const HEALTH_CONDITIONS: &[(&str, &str)] = &[
    ("q3_01", "Hearing problems"),
    ("q3_02", "Vision problems"),
    ("q3_03", "Mobility limitations"),
    ("q3_04", "Dexterity issues"),
    ("q3_05", "Breathing difficulties"),
    ("q3_06", "Mental ability issues"),
    ("q3_07", "Social behavior conditions"),
    ("q3_08", "Mental health conditions"),
    ("q3_09", "Other illnesses"),
    ("q3_10", "No impairments"),
    ("q3_11", "Prefer not to say"),
    ("q3_12", "Don't know"),
];

pub const DEVICES: &[(&str, &str)] = &[
    ("q1_01", "Smart TV"),
    ("q1_02", "TV"),
    ("q1_03", "Games console / handheld"),
    ("q1_04", "Desktop computer"),
    ("q1_05", "Laptop"),
    ("q1_06", "Tablet"),
    ("q1_07", "Smartphone"),
    ("q1_08", "Non-smart mobile phone"),
    ("q1_09", "Landline telephone"),
    ("q1_10", "None of these"),
];

/// Default reasons-for-going-online block. Survey waves renumber this
/// block, so catalog files usually override it.
pub const USAGE_REASONS: &[(&str, &str)] = &[
    ("q2_01", "Keeping in touch"),
    ("q2_02", "Online banking"),
    ("q2_03", "Shopping"),
    ("q2_04", "Work or study"),
    ("q2_05", "Health services"),
    ("q2_06", "Government services"),
    ("q2_07", "News and information"),
    ("q2_08", "Entertainment"),
    ("q2_09", "None of these"),
];
