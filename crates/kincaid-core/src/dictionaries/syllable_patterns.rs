//! Pattern tables for the pattern-based syllable estimator.
//!
//! Each entry is a case-insensitive regex matched against a single word.
//! A matching [`ADD_PATTERNS`] entry adds one syllable to the vowel-group
//! count; a matching [`DEDUCT_PATTERNS`] entry removes one. Each pattern
//! contributes at most once per word, however many times it matches.

/// Spellings where vowel groups undercount (e.g. "ia", "ier", "-ted").
pub const ADD_PATTERNS: &[&str] = &[
    r"y\b",
    r"ia",
    r"\bmc",
    r"[il]e\b",
    r"ted\b",
    r"ee\b",
    r"io\b",
    r"ded\b",
    r"[io]er\b",
    r"y[bckglmnrstwxv]",
    r"sms?\b",
    r"eo",
    r"[eior]ed\b",
    r"iol",
    r"\bhy",
    r"iu",
    r"s'",
    r"oe\b",
    r"iot",
    r"tua",
    r"aue",
    r"ea\b",
    r"iest\b",
    r"ios",
    r"yst",
    r"nte\b",
    r"ce's",
    r"ying\b",
    r"[bcdfgkopt]led\b",
    r"ciat",
    r"lement",
    r"typ",
    r"ly[dehops]",
    r"[drv]ious",
    r"z's\b",
    r"ae\b",
    r"io[mpr]",
    r"tre\b",
    r"ione\b",
    r"[cdehlorn]ue\b",
    r"se's",
    r"nua",
    r"x'",
    r"oing",
    r"yz",
    r"creat",
    r"lua",
    r"iod",
    r"\breass",
    r"eing\b",
    r"dua",
    r"[bdprz]ion",
    r"iello\b",
    r"oa\b",
    r"ge's",
    r"phys",
    r"eact",
    r"ioc",
    r"iog",
    r"scien",
    r"dys",
    r"uou",
    r"\brein",
    r"ienn",
    r"rya",
    r"bre\b",
    r"tke\b",
    r"ryd",
    r"sh's\b",
    r"rua",
    r"ryp",
    r"rient",
    r"uing",
    r"xual",
    r"eely\b",
    r"leman\b",
    r"fluen",
    r"he'",
    r"dre\b",
    r"iet",
    r"loui",
    r"dl\b",
    r"\bio",
    r"rys",
    r"tui",
    r"rye",
    r"\bcoe",
    r"\breali",
    r"ntes\b",
    r"ch'",
    r"mye",
    r"eeman\b",
    r"ryo",
    r"linea",
    r"theat",
    r"reapp",
    r"oers\b",
    r"tys",
    r"\bcyp",
    r"eemp",
    r"nys",
    r"aic\b",
    r"cua",
    r"tl\b",
    r"tres\b",
    r"ciano",
    r"lione",
    r"eand",
    r"\bdya",
    r"gyp",
    r"croat",
    r"heroi",
    r"rearr",
    r"eex",
    r"cre\b",
    r"oniou",
    r"eum\b",
    r"fred\b",
    r"dien",
    r"oua",
    r"oincid",
    r"coordi",
    r"nucle",
    r"nyd",
    r"\breen",
    r"\breun",
    r"bys",
    r"iale\b",
    r"ifiers",
    r"rean",
    r"pre\b",
    r"iore\b",
    r"-in\b",
];

/// Spellings where vowel groups overcount (silent endings, diphthongs).
pub const DEDUCT_PATTERNS: &[&str] = &[
    r"e\b",
    r"ey\b",
    r"ed\b",
    r"ay\b",
    r"[kmrpbdtnvrw]es\b",
    r"ely\b",
    r"oy\b",
    r"cia",
    r"[aeilouy]le\b",
    r"tia[nl]?\b",
    r"tia([nl]s)?\b",
    r"[aeo]ym",
    r"eness\b",
    r"\bfore",
    r"ay[bclntrw]",
    r"ement",
    r"iles\b",
    r"[ao]les\b",
    r"eman\b",
    r"aying\b",
    r"oy[cln]",
    r"eful",
    r"\bey",
    r"geon",
    r"\bhome",
    r"eyn",
    r"ically",
    r"eless",
    r"sian\b",
    r"yles",
    r"\bwhite",
    r"eway",
    r"georg",
    r"lles\b",
    r"busine",
    r"illia",
    r"ules\b",
    r"\bhym",
    r"ryst",
    r"eyl",
    r"ehou",
    r"eyw",
    r"ekeep",
    r"people",
    r"every",
    r"\blife",
    r"giu",
    r"eyin",
    r"eout",
    r"oying\b",
    r"gues\b",
    r"\breine",
    r"geou",
    r"ques\b",
    r"vior",
    r"sewo",
    r"oseb",
    r"eyc",
    r"\bspace",
    r"\bstone",
    r"eover",
    r"ehol",
    r"iliar",
    r"estone",
    r"eyb",
    r"oyk",
    r"velan",
    r"piet",
    r"\bgia",
    r"somet",
    r"esvil",
    r"lyst",
    r"arriag",
    r"gior",
];
