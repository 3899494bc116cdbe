//! Built-in default word lists.
//!
//! Small curated lists of common words per language, used by
//! [`SpellChecker::load_default_dictionary`](crate::SpellChecker::load_default_dictionary)
//! when the host does not supply its own. Real deployments should load a full
//! word list with
//! [`SpellChecker::load_word_list_file`](crate::SpellChecker::load_word_list_file).

use crate::language::Language;

/// The built-in words for `lang`.
pub fn default_words(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::English => ENGLISH,
        Language::Persian => PERSIAN,
        Language::Arabic => ARABIC,
        Language::French => FRENCH,
        Language::Spanish => SPANISH,
        Language::German => GERMAN,
        Language::Italian => ITALIAN,
        Language::Russian => RUSSIAN,
        Language::Chinese => CHINESE,
        Language::Japanese => JAPANESE,
        Language::Korean => KOREAN,
    }
}

const ENGLISH: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it",
    "for", "not", "on", "with", "he", "as", "you", "do", "at", "this", "but",
    "his", "by", "from", "they", "we", "say", "her", "she", "or", "an",
    "will", "my", "one", "all", "would", "there", "their", "what", "so",
    "up", "out", "if", "about", "who", "get", "which", "go", "me", "when",
    "make", "can", "like", "time", "no", "just", "him", "know", "take",
    "people", "into", "year", "your", "good", "some", "could", "them", "see",
    "other", "than", "then", "now", "look", "only", "come", "its", "over",
    "think", "also", "back", "after", "use", "two", "how", "our", "work",
    "first", "well", "way", "even", "new", "want", "because", "any", "these",
    "give", "day", "most", "us", "is", "was", "are", "were", "been", "being",
    "am", "hello", "world", "help", "hell", "word", "computer", "program",
    "programming", "software", "hardware", "internet", "email", "please",
    "thank", "thanks", "yes", "okay", "golang", "science", "algorithm",
    "data", "structure", "bloom", "filter", "spell", "checker", "dictionary",
    "suggestion", "similarity", "distance", "edit", "levenshtein", "candidate",
    "generation", "typo", "keyboard", "language",
];

const PERSIAN: &[&str] = &[
    "سلام", "دنیا", "برنامه", "نویسی", "کامپیوتر", "علم", "الگوریتم", "داده",
    "ساختار", "فیلتر", "املا", "بررسی", "فرهنگ", "لغت", "پیشنهاد", "شباهت",
    "فاصله", "ویرایش", "لوونشتاین", "نامزد", "تولید", "غلط", "کیبورد", "کمک",
    "کار", "کلمه", "کد", "تست", "مثال", "نمایش", "کتاب", "خانه",
    "دوست", "زبان", "ایران", "مدرسه", "شهر",
];

const ARABIC: &[&str] = &[
    "مرحبا", "سلام", "كتاب", "بيت", "شمس", "قمر", "ولد", "بنت", "عالم",
    "قلم", "باب", "يوم", "ليل", "نور", "حب", "علم", "عمل",
];

const FRENCH: &[&str] = &[
    "bonjour", "monde", "merci", "maison", "école", "français", "être",
    "avoir", "faire", "aller", "voir", "savoir", "pouvoir", "vouloir", "venir",
    "très", "bien", "petit", "grand", "nouveau", "garçon", "fille", "livre",
    "eau", "été",
];

const SPANISH: &[&str] = &[
    "hola", "mundo", "gracias", "casa", "escuela", "español", "niño", "mañana",
    "año", "agua", "libro", "ciudad", "tiempo", "persona", "trabajo", "grande",
    "pequeño", "bueno", "día", "noche", "corazón", "canción",
];

const GERMAN: &[&str] = &[
    "hallo", "welt", "danke", "haus", "schule", "deutsch", "straße", "mädchen",
    "über", "schön", "grün", "größe", "brücke", "buch", "wasser", "zeit",
    "arbeit", "freund", "kind", "tag", "nacht",
];

const ITALIAN: &[&str] = &[
    "ciao", "mondo", "grazie", "casa", "scuola", "italiano", "città", "perché",
    "più", "libro", "acqua", "tempo", "lavoro", "amico", "bambino", "giorno",
    "notte", "cuore", "università", "caffè",
];

const RUSSIAN: &[&str] = &[
    "привет", "мир", "спасибо", "дом", "школа", "русский", "язык", "книга",
    "вода", "время", "работа", "друг", "ребёнок", "день", "ночь", "город",
    "слово", "человек", "жизнь", "сердце",
];

const CHINESE: &[&str] = &[
    "你好", "世界", "谢谢", "中国", "中文", "学校", "朋友", "老师", "学生", "电脑", "程序", "时间",
    "工作", "北京", "喜欢",
];

const JAPANESE: &[&str] = &[
    "こんにちは", "ありがとう", "さようなら", "ひらがな", "カタカナ", "日本", "日本語", "学校", "先生",
    "学生", "友達", "時間", "水", "本", "東京",
];

const KOREAN: &[&str] = &[
    "안녕", "안녕하세요", "감사합니다", "한국", "한국어", "학교", "친구", "선생님", "학생", "사랑",
    "시간", "물", "책", "서울", "컴퓨터",
];
