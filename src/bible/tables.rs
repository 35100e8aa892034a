//! Built-in abbreviation and full-name tables.
//!
//! Plain data: one abbreviation table and one full-name table per language.
//! `catalog` turns these into lookup maps at startup.

/// The 66 canonical book codes in canonical order.
pub const CANONICAL_BOOKS: [&str; 66] = [
    "GEN", "EXO", "LEV", "NUM", "DEU", "JOS", "JDG", "RUT", "1SA", "2SA",
    "1KI", "2KI", "1CH", "2CH", "EZR", "NEH", "EST", "JOB", "PSA", "PRO",
    "ECC", "SNG", "ISA", "JER", "LAM", "EZK", "DAN", "HOS", "JOL", "AMO",
    "OBA", "JON", "MIC", "NAM", "HAB", "ZEP", "HAG", "ZEC", "MAL", "MAT",
    "MRK", "LUK", "JHN", "ACT", "ROM", "1CO", "2CO", "GAL", "EPH", "PHP",
    "COL", "1TH", "2TH", "1TI", "2TI", "TIT", "PHM", "HEB", "JAS", "1PE",
    "2PE", "1JN", "2JN", "3JN", "JUD", "REV",
];

pub(super) const KOR_ABBREVIATIONS: &[(&str, &str)] = &[
    ("창", "GEN"), ("출", "EXO"), ("레", "LEV"), ("민", "NUM"), ("신", "DEU"),
    ("수", "JOS"), ("삿", "JDG"), ("룻", "RUT"), ("삼상", "1SA"), ("삼하", "2SA"),
    ("왕상", "1KI"), ("왕하", "2KI"), ("대상", "1CH"), ("대하", "2CH"), ("스", "EZR"),
    ("느", "NEH"), ("에", "EST"), ("욥", "JOB"), ("시", "PSA"), ("잠", "PRO"),
    ("전", "ECC"), ("아", "SNG"), ("사", "ISA"), ("렘", "JER"), ("애", "LAM"),
    ("겔", "EZK"), ("단", "DAN"), ("호", "HOS"), ("욜", "JOL"), ("암", "AMO"),
    ("옵", "OBA"), ("욘", "JON"), ("미", "MIC"), ("나", "NAM"), ("합", "HAB"),
    ("습", "ZEP"), ("학", "HAG"), ("슥", "ZEC"), ("말", "MAL"), ("마", "MAT"),
    ("막", "MRK"), ("눅", "LUK"), ("요", "JHN"), ("행", "ACT"), ("롬", "ROM"),
    ("고전", "1CO"), ("고후", "2CO"), ("갈", "GAL"), ("엡", "EPH"), ("빌", "PHP"),
    ("골", "COL"), ("살전", "1TH"), ("살후", "2TH"), ("딤전", "1TI"), ("딤후", "2TI"),
    ("딛", "TIT"), ("몬", "PHM"), ("히", "HEB"), ("약", "JAS"), ("벧전", "1PE"),
    ("벧후", "2PE"), ("요일", "1JN"), ("요이", "2JN"), ("요삼", "3JN"), ("유", "JUD"),
    ("계", "REV"),
];

pub(super) const SPA_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Gn", "GEN"), ("Ex", "EXO"), ("Lv", "LEV"), ("Nm", "NUM"), ("Dt", "DEU"),
    ("Jos", "JOS"), ("Jue", "JDG"), ("Rt", "RUT"), ("1S", "1SA"), ("2S", "2SA"),
    ("1R", "1KI"), ("2R", "2KI"), ("1Cr", "1CH"), ("2Cr", "2CH"), ("Esd", "EZR"),
    ("Neh", "NEH"), ("Est", "EST"), ("Job", "JOB"), ("Sal", "PSA"), ("Pr", "PRO"),
    ("Ec", "ECC"), ("Cnt", "SNG"), ("Is", "ISA"), ("Jer", "JER"), ("Lm", "LAM"),
    ("Ez", "EZK"), ("Dn", "DAN"), ("Os", "HOS"), ("Jl", "JOL"), ("Am", "AMO"),
    ("Abd", "OBA"), ("Jon", "JON"), ("Mi", "MIC"), ("Nah", "NAM"), ("Hab", "HAB"),
    ("Sof", "ZEP"), ("Hag", "HAG"), ("Zac", "ZEC"), ("Mal", "MAL"), ("Mt", "MAT"),
    ("Mr", "MRK"), ("Lc", "LUK"), ("Jn", "JHN"), ("Hch", "ACT"), ("Ro", "ROM"),
    ("1Co", "1CO"), ("2Co", "2CO"), ("Ga", "GAL"), ("Ef", "EPH"), ("Fil", "PHP"),
    ("Col", "COL"), ("1Ts", "1TH"), ("2Ts", "2TH"), ("1Ti", "1TI"), ("2Ti", "2TI"),
    ("Tit", "TIT"), ("Flm", "PHM"), ("He", "HEB"), ("Stg", "JAS"), ("1P", "1PE"),
    ("2P", "2PE"), ("1Jn", "1JN"), ("2Jn", "2JN"), ("3Jn", "3JN"), ("Jud", "JUD"),
    ("Ap", "REV"),
];

pub(super) const ENG_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Gen", "GEN"), ("Exo", "EXO"), ("Lev", "LEV"), ("Num", "NUM"), ("Deu", "DEU"),
    ("Jos", "JOS"), ("Jdg", "JDG"), ("Rth", "RUT"), ("1Sa", "1SA"), ("2Sa", "2SA"),
    ("1Ki", "1KI"), ("2Ki", "2KI"), ("1Ch", "1CH"), ("2Ch", "2CH"), ("Ezr", "EZR"),
    ("Neh", "NEH"), ("Est", "EST"), ("Job", "JOB"), ("Psa", "PSA"), ("Pro", "PRO"),
    ("Ecc", "ECC"), ("Son", "SNG"), ("Isa", "ISA"), ("Jer", "JER"), ("Lam", "LAM"),
    ("Eze", "EZK"), ("Dan", "DAN"), ("Hos", "HOS"), ("Joe", "JOL"), ("Amo", "AMO"),
    ("Oba", "OBA"), ("Jon", "JON"), ("Mic", "MIC"), ("Nah", "NAM"), ("Hab", "HAB"),
    ("Zep", "ZEP"), ("Hag", "HAG"), ("Zec", "ZEC"), ("Mal", "MAL"), ("Mat", "MAT"),
    ("Mar", "MRK"), ("Luk", "LUK"), ("Joh", "JHN"), ("Act", "ACT"), ("Rom", "ROM"),
    ("1Co", "1CO"), ("2Co", "2CO"), ("Gal", "GAL"), ("Eph", "EPH"), ("Php", "PHP"),
    ("Col", "COL"), ("1Th", "1TH"), ("2Th", "2TH"), ("1Ti", "1TI"), ("2Ti", "2TI"),
    ("Tit", "TIT"), ("Phm", "PHM"), ("Heb", "HEB"), ("Jas", "JAS"), ("1Pe", "1PE"),
    ("2Pe", "2PE"), ("1Jo", "1JN"), ("2Jo", "2JN"), ("3Jo", "3JN"), ("Jud", "JUD"),
    ("Rev", "REV"),
    // Short forms
    ("Gn", "GEN"), ("Ex", "EXO"), ("Lv", "LEV"), ("Nm", "NUM"), ("Dt", "DEU"),
    ("Jsh", "JOS"), ("Jdgs", "JDG"), ("Ru", "RUT"), ("Ps", "PSA"), ("Prv", "PRO"),
    ("Eccl", "ECC"), ("Is", "ISA"), ("Ez", "EZK"), ("Mt", "MAT"), ("Mk", "MRK"),
    ("Lk", "LUK"), ("Jn", "JHN"), ("Rm", "ROM"), ("Phil", "PHP"), ("Hb", "HEB"),
    ("Rv", "REV"),
];

pub(super) const KOR_NAMES: &[(&str, &str)] = &[
    ("GEN", "창세기"), ("EXO", "출애굽기"), ("LEV", "레위기"), ("NUM", "민수기"), ("DEU", "신명기"),
    ("JOS", "여호수아"), ("JDG", "사사기"), ("RUT", "룻기"), ("1SA", "사무엘상"), ("2SA", "사무엘하"),
    ("1KI", "열왕기상"), ("2KI", "열왕기하"), ("1CH", "역대상"), ("2CH", "역대하"), ("EZR", "에스라"),
    ("NEH", "느헤미야"), ("EST", "에스더"), ("JOB", "욥기"), ("PSA", "시편"), ("PRO", "잠언"),
    ("ECC", "전도서"), ("SNG", "아가"), ("ISA", "이사야"), ("JER", "예레미야"), ("LAM", "예레미야애가"),
    ("EZK", "에스겔"), ("DAN", "다니엘"), ("HOS", "호세아"), ("JOL", "요엘"), ("AMO", "아모스"),
    ("OBA", "오바댜"), ("JON", "요나"), ("MIC", "미가"), ("NAM", "나훔"), ("HAB", "하박국"),
    ("ZEP", "스바냐"), ("HAG", "학개"), ("ZEC", "스가랴"), ("MAL", "말라기"), ("MAT", "마태복음"),
    ("MRK", "마가복음"), ("LUK", "누가복음"), ("JHN", "요한복음"), ("ACT", "사도행전"), ("ROM", "로마서"),
    ("1CO", "고린도전서"), ("2CO", "고린도후서"), ("GAL", "갈라디아서"), ("EPH", "에베소서"), ("PHP", "빌립보서"),
    ("COL", "골로새서"), ("1TH", "데살로니가전서"), ("2TH", "데살로니가후서"), ("1TI", "디모데전서"), ("2TI", "디모데후서"),
    ("TIT", "디도서"), ("PHM", "빌레몬서"), ("HEB", "히브리서"), ("JAS", "야고보서"), ("1PE", "베드로전서"),
    ("2PE", "베드로후서"), ("1JN", "요한일서"), ("2JN", "요한이서"), ("3JN", "요한삼서"), ("JUD", "유다서"),
    ("REV", "요한계시록"),
];

pub(super) const SPA_NAMES: &[(&str, &str)] = &[
    ("GEN", "Génesis"), ("EXO", "Éxodo"), ("LEV", "Levítico"), ("NUM", "Números"), ("DEU", "Deuteronomio"),
    ("JOS", "Josué"), ("JDG", "Jueces"), ("RUT", "Rut"), ("1SA", "1 Samuel"), ("2SA", "2 Samuel"),
    ("1KI", "1 Reyes"), ("2KI", "2 Reyes"), ("1CH", "1 Crónicas"), ("2CH", "2 Crónicas"), ("EZR", "Esdras"),
    ("NEH", "Nehemías"), ("EST", "Ester"), ("JOB", "Job"), ("PSA", "Salmos"), ("PRO", "Proverbios"),
    ("ECC", "Eclesiastés"), ("SNG", "Cantares"), ("ISA", "Isaías"), ("JER", "Jeremías"), ("LAM", "Lamentaciones"),
    ("EZK", "Ezequiel"), ("DAN", "Daniel"), ("HOS", "Oseas"), ("JOL", "Joel"), ("AMO", "Amós"),
    ("OBA", "Abdías"), ("JON", "Jonás"), ("MIC", "Miqueas"), ("NAM", "Nahum"), ("HAB", "Habacuc"),
    ("ZEP", "Sofonías"), ("HAG", "Hageo"), ("ZEC", "Zacarías"), ("MAL", "Malaquías"), ("MAT", "Mateo"),
    ("MRK", "Marcos"), ("LUK", "Lucas"), ("JHN", "Juan"), ("ACT", "Hechos"), ("ROM", "Romanos"),
    ("1CO", "1 Corintios"), ("2CO", "2 Corintios"), ("GAL", "Gálatas"), ("EPH", "Efesios"), ("PHP", "Filipenses"),
    ("COL", "Colosenses"), ("1TH", "1 Tesalonicenses"), ("2TH", "2 Tesalonicenses"), ("1TI", "1 Timoteo"), ("2TI", "2 Timoteo"),
    ("TIT", "Tito"), ("PHM", "Filemón"), ("HEB", "Hebreos"), ("JAS", "Santiago"), ("1PE", "1 Pedro"),
    ("2PE", "2 Pedro"), ("1JN", "1 Juan"), ("2JN", "2 Juan"), ("3JN", "3 Juan"), ("JUD", "Judas"),
    ("REV", "Apocalipsis"),
];

pub(super) const ENG_NAMES: &[(&str, &str)] = &[
    ("GEN", "Genesis"), ("EXO", "Exodus"), ("LEV", "Leviticus"), ("NUM", "Numbers"), ("DEU", "Deuteronomy"),
    ("JOS", "Joshua"), ("JDG", "Judges"), ("RUT", "Ruth"), ("1SA", "1 Samuel"), ("2SA", "2 Samuel"),
    ("1KI", "1 Kings"), ("2KI", "2 Kings"), ("1CH", "1 Chronicles"), ("2CH", "2 Chronicles"), ("EZR", "Ezra"),
    ("NEH", "Nehemiah"), ("EST", "Esther"), ("JOB", "Job"), ("PSA", "Psalms"), ("PRO", "Proverbs"),
    ("ECC", "Ecclesiastes"), ("SNG", "Song of Solomon"), ("ISA", "Isaiah"), ("JER", "Jeremiah"), ("LAM", "Lamentations"),
    ("EZK", "Ezekiel"), ("DAN", "Daniel"), ("HOS", "Hosea"), ("JOL", "Joel"), ("AMO", "Amos"),
    ("OBA", "Obadiah"), ("JON", "Jonah"), ("MIC", "Micah"), ("NAM", "Nahum"), ("HAB", "Habakkuk"),
    ("ZEP", "Zephaniah"), ("HAG", "Haggai"), ("ZEC", "Zechariah"), ("MAL", "Malachi"), ("MAT", "Matthew"),
    ("MRK", "Mark"), ("LUK", "Luke"), ("JHN", "John"), ("ACT", "Acts"), ("ROM", "Romans"),
    ("1CO", "1 Corinthians"), ("2CO", "2 Corinthians"), ("GAL", "Galatians"), ("EPH", "Ephesians"), ("PHP", "Philippians"),
    ("COL", "Colossians"), ("1TH", "1 Thessalonians"), ("2TH", "2 Thessalonians"), ("1TI", "1 Timothy"), ("2TI", "2 Timothy"),
    ("TIT", "Titus"), ("PHM", "Philemon"), ("HEB", "Hebrews"), ("JAS", "James"), ("1PE", "1 Peter"),
    ("2PE", "2 Peter"), ("1JN", "1 John"), ("2JN", "2 John"), ("3JN", "3 John"), ("JUD", "Jude"),
    ("REV", "Revelation"),
];
