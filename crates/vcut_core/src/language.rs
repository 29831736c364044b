//! ISO 639-2 language code lookup for stream titles.

/// ISO 639-2 codes (bibliographic and terminology forms) and display names.
const ISO639_2: &[(&str, &str)] = &[
    ("afr", "Afrikaans"),
    ("alb", "Albanian"),
    ("amh", "Amharic"),
    ("ara", "Arabic"),
    ("arm", "Armenian"),
    ("aze", "Azerbaijani"),
    ("baq", "Basque"),
    ("bel", "Belarusian"),
    ("ben", "Bengali"),
    ("bod", "Tibetan"),
    ("bos", "Bosnian"),
    ("bre", "Breton"),
    ("bul", "Bulgarian"),
    ("bur", "Burmese"),
    ("cat", "Catalan"),
    ("ces", "Czech"),
    ("chi", "Chinese"),
    ("cym", "Welsh"),
    ("cze", "Czech"),
    ("dan", "Danish"),
    ("deu", "German"),
    ("dut", "Dutch"),
    ("ell", "Greek, Modern"),
    ("eng", "English"),
    ("epo", "Esperanto"),
    ("est", "Estonian"),
    ("eus", "Basque"),
    ("fao", "Faroese"),
    ("fas", "Persian"),
    ("fil", "Filipino"),
    ("fin", "Finnish"),
    ("fra", "French"),
    ("fre", "French"),
    ("fry", "Western Frisian"),
    ("geo", "Georgian"),
    ("ger", "German"),
    ("gla", "Gaelic"),
    ("gle", "Irish"),
    ("glg", "Galician"),
    ("gre", "Greek, Modern"),
    ("guj", "Gujarati"),
    ("hat", "Haitian"),
    ("hau", "Hausa"),
    ("heb", "Hebrew"),
    ("hin", "Hindi"),
    ("hrv", "Croatian"),
    ("hun", "Hungarian"),
    ("hye", "Armenian"),
    ("ibo", "Igbo"),
    ("ice", "Icelandic"),
    ("ind", "Indonesian"),
    ("isl", "Icelandic"),
    ("ita", "Italian"),
    ("jav", "Javanese"),
    ("jpn", "Japanese"),
    ("kan", "Kannada"),
    ("kat", "Georgian"),
    ("kaz", "Kazakh"),
    ("khm", "Central Khmer"),
    ("kin", "Kinyarwanda"),
    ("kir", "Kirghiz"),
    ("kor", "Korean"),
    ("kur", "Kurdish"),
    ("lao", "Lao"),
    ("lat", "Latin"),
    ("lav", "Latvian"),
    ("lit", "Lithuanian"),
    ("ltz", "Luxembourgish"),
    ("mac", "Macedonian"),
    ("mal", "Malayalam"),
    ("mao", "Maori"),
    ("mar", "Marathi"),
    ("may", "Malay"),
    ("mis", "Uncoded languages"),
    ("mkd", "Macedonian"),
    ("mlt", "Maltese"),
    ("mon", "Mongolian"),
    ("mri", "Maori"),
    ("msa", "Malay"),
    ("mul", "Multiple languages"),
    ("mya", "Burmese"),
    ("nep", "Nepali"),
    ("nld", "Dutch"),
    ("nno", "Norwegian Nynorsk"),
    ("nob", "Norwegian Bokmål"),
    ("nor", "Norwegian"),
    ("pan", "Panjabi"),
    ("per", "Persian"),
    ("pol", "Polish"),
    ("por", "Portuguese"),
    ("pus", "Pushto"),
    ("que", "Quechua"),
    ("roh", "Romansh"),
    ("ron", "Romanian"),
    ("rum", "Romanian"),
    ("rus", "Russian"),
    ("san", "Sanskrit"),
    ("sin", "Sinhala"),
    ("slk", "Slovak"),
    ("slo", "Slovak"),
    ("slv", "Slovenian"),
    ("som", "Somali"),
    ("spa", "Spanish"),
    ("sqi", "Albanian"),
    ("srp", "Serbian"),
    ("swa", "Swahili"),
    ("swe", "Swedish"),
    ("tam", "Tamil"),
    ("tat", "Tatar"),
    ("tel", "Telugu"),
    ("tgk", "Tajik"),
    ("tgl", "Tagalog"),
    ("tha", "Thai"),
    ("tib", "Tibetan"),
    ("tur", "Turkish"),
    ("uig", "Uighur"),
    ("ukr", "Ukrainian"),
    ("und", "Undetermined"),
    ("urd", "Urdu"),
    ("uzb", "Uzbek"),
    ("vie", "Vietnamese"),
    ("wel", "Welsh"),
    ("xho", "Xhosa"),
    ("yid", "Yiddish"),
    ("yor", "Yoruba"),
    ("zho", "Chinese"),
    ("zul", "Zulu"),
    ("zxx", "No linguistic content"),
];

/// Display name for an ISO 639-2 code, if the table knows it.
pub fn language_name(code: &str) -> Option<&'static str> {
    let code = code.trim().to_ascii_lowercase();
    ISO639_2
        .binary_search_by(|(c, _)| (*c).cmp(code.as_str()))
        .ok()
        .map(|idx| ISO639_2[idx].1)
}

/// Title for a stream with language `code`; the raw code when unknown.
pub fn language_title(code: &str) -> String {
    match language_name(code) {
        Some(name) => name.to_string(),
        None => {
            tracing::debug!("No language name for code {:?}", code);
            code.to_string()
        }
    }
}
