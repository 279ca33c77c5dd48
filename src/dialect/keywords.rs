pub const FALLBACK_LABEL: &str = "lainnya";

pub const SUROBOYOAN: &[&str] = &[
    "rek", "cak", "cok", "jancok", "ndelok", "mangan", "arep", "ndisik", "ndang", "opo", "ayo",
    "le", "tak", "kok", "ndeso", "wes", "iso", "cuk", "maceh",
];

pub const MATARAMAN: &[&str] = &[
    "ndak", "opo", "mboten", "kulo", "panjenengan", "arep", "ndangu", "nggih", "wes", "durung",
    "ngene", "yo", "lho", "ngantos", "nuwun", "mari",
];

pub const MADURA: &[&str] = &[
    "ka'", "jhuk", "dhika", "kodhu", "engko", "kaula", "beddhi", "nyare", "sapa", "mon", "bhek",
    "jhah", "melle", "ta'", "seppo",
];

pub const BUILTIN_TABLE: &[(&str, &[&str])] = &[
    ("suroboyoan", SUROBOYOAN),
    ("mataraman", MATARAMAN),
    ("madura", MADURA),
];

pub const QUIZ_SAMPLES: &[(&str, &str)] = &[
    ("Aku arep mangan rawon rek", "suroboyoan"),
    ("Ndang ojo suwe rek, mangan e wes adhem", "suroboyoan"),
    ("Ayo cak, tak tunggu neng warung", "suroboyoan"),
    ("Nggih kula badhe tindak rumiyin", "mataraman"),
    ("Panjenengan kersa dhahar nopo?", "mataraman"),
    ("Ngene loh carane nggawe sega", "mataraman"),
    ("Sapa ka' nyare?", "madura"),
    ("Engko' badha ka pasar", "madura"),
    ("Kodhu bhâ' potré", "madura"),
    ("Saya mau pergi ke pasar", "lainnya"),
    ("Besok libur kita ke pantai", "lainnya"),
];
