//! Named character reference lookup table.
//!
//! [§ 13.5 Named character references](https://html.spec.whatwg.org/multipage/named-characters.html#named-character-references)
//!
//! The full HTML 4 entity set, every legacy (semicolon-optional) entity, and the
//! HTML5 additions that show up in real documents. Names are stored without the
//! leading `&` and trailing `;`.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Maps entity names to their replacement text. A few entities expand to two
/// code points (e.g. "fjlig" -> "fj").
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Markup-significant characters
        ("amp", "&"),
        ("AMP", "&"),
        ("lt", "<"),
        ("LT", "<"),
        ("gt", ">"),
        ("GT", ">"),
        ("quot", "\""),
        ("QUOT", "\""),
        ("apos", "'"),
        // Latin-1 supplement (U+00A0 to U+00FF)
        ("nbsp", "\u{00A0}"),
        ("iexcl", "\u{00A1}"),
        ("cent", "\u{00A2}"),
        ("pound", "\u{00A3}"),
        ("curren", "\u{00A4}"),
        ("yen", "\u{00A5}"),
        ("brvbar", "\u{00A6}"),
        ("sect", "\u{00A7}"),
        ("uml", "\u{00A8}"),
        ("copy", "\u{00A9}"),
        ("COPY", "\u{00A9}"),
        ("ordf", "\u{00AA}"),
        ("laquo", "\u{00AB}"),
        ("not", "\u{00AC}"),
        ("shy", "\u{00AD}"),
        ("reg", "\u{00AE}"),
        ("REG", "\u{00AE}"),
        ("macr", "\u{00AF}"),
        ("deg", "\u{00B0}"),
        ("plusmn", "\u{00B1}"),
        ("sup2", "\u{00B2}"),
        ("sup3", "\u{00B3}"),
        ("acute", "\u{00B4}"),
        ("micro", "\u{00B5}"),
        ("para", "\u{00B6}"),
        ("middot", "\u{00B7}"),
        ("cedil", "\u{00B8}"),
        ("sup1", "\u{00B9}"),
        ("ordm", "\u{00BA}"),
        ("raquo", "\u{00BB}"),
        ("frac14", "\u{00BC}"),
        ("frac12", "\u{00BD}"),
        ("frac34", "\u{00BE}"),
        ("iquest", "\u{00BF}"),
        ("Agrave", "\u{00C0}"),
        ("Aacute", "\u{00C1}"),
        ("Acirc", "\u{00C2}"),
        ("Atilde", "\u{00C3}"),
        ("Auml", "\u{00C4}"),
        ("Aring", "\u{00C5}"),
        ("AElig", "\u{00C6}"),
        ("Ccedil", "\u{00C7}"),
        ("Egrave", "\u{00C8}"),
        ("Eacute", "\u{00C9}"),
        ("Ecirc", "\u{00CA}"),
        ("Euml", "\u{00CB}"),
        ("Igrave", "\u{00CC}"),
        ("Iacute", "\u{00CD}"),
        ("Icirc", "\u{00CE}"),
        ("Iuml", "\u{00CF}"),
        ("ETH", "\u{00D0}"),
        ("Ntilde", "\u{00D1}"),
        ("Ograve", "\u{00D2}"),
        ("Oacute", "\u{00D3}"),
        ("Ocirc", "\u{00D4}"),
        ("Otilde", "\u{00D5}"),
        ("Ouml", "\u{00D6}"),
        ("times", "\u{00D7}"),
        ("Oslash", "\u{00D8}"),
        ("Ugrave", "\u{00D9}"),
        ("Uacute", "\u{00DA}"),
        ("Ucirc", "\u{00DB}"),
        ("Uuml", "\u{00DC}"),
        ("Yacute", "\u{00DD}"),
        ("THORN", "\u{00DE}"),
        ("szlig", "\u{00DF}"),
        ("agrave", "\u{00E0}"),
        ("aacute", "\u{00E1}"),
        ("acirc", "\u{00E2}"),
        ("atilde", "\u{00E3}"),
        ("auml", "\u{00E4}"),
        ("aring", "\u{00E5}"),
        ("aelig", "\u{00E6}"),
        ("ccedil", "\u{00E7}"),
        ("egrave", "\u{00E8}"),
        ("eacute", "\u{00E9}"),
        ("ecirc", "\u{00EA}"),
        ("euml", "\u{00EB}"),
        ("igrave", "\u{00EC}"),
        ("iacute", "\u{00ED}"),
        ("icirc", "\u{00EE}"),
        ("iuml", "\u{00EF}"),
        ("eth", "\u{00F0}"),
        ("ntilde", "\u{00F1}"),
        ("ograve", "\u{00F2}"),
        ("oacute", "\u{00F3}"),
        ("ocirc", "\u{00F4}"),
        ("otilde", "\u{00F5}"),
        ("ouml", "\u{00F6}"),
        ("divide", "\u{00F7}"),
        ("oslash", "\u{00F8}"),
        ("ugrave", "\u{00F9}"),
        ("uacute", "\u{00FA}"),
        ("ucirc", "\u{00FB}"),
        ("uuml", "\u{00FC}"),
        ("yacute", "\u{00FD}"),
        ("thorn", "\u{00FE}"),
        ("yuml", "\u{00FF}"),
        // Latin extended and spacing modifiers
        ("OElig", "\u{0152}"),
        ("oelig", "\u{0153}"),
        ("Scaron", "\u{0160}"),
        ("scaron", "\u{0161}"),
        ("Yuml", "\u{0178}"),
        ("fnof", "\u{0192}"),
        ("circ", "\u{02C6}"),
        ("tilde", "\u{02DC}"),
        // Greek
        ("Alpha", "\u{0391}"),
        ("Beta", "\u{0392}"),
        ("Gamma", "\u{0393}"),
        ("Delta", "\u{0394}"),
        ("Epsilon", "\u{0395}"),
        ("Zeta", "\u{0396}"),
        ("Eta", "\u{0397}"),
        ("Theta", "\u{0398}"),
        ("Iota", "\u{0399}"),
        ("Kappa", "\u{039A}"),
        ("Lambda", "\u{039B}"),
        ("Mu", "\u{039C}"),
        ("Nu", "\u{039D}"),
        ("Xi", "\u{039E}"),
        ("Omicron", "\u{039F}"),
        ("Pi", "\u{03A0}"),
        ("Rho", "\u{03A1}"),
        ("Sigma", "\u{03A3}"),
        ("Tau", "\u{03A4}"),
        ("Upsilon", "\u{03A5}"),
        ("Phi", "\u{03A6}"),
        ("Chi", "\u{03A7}"),
        ("Psi", "\u{03A8}"),
        ("Omega", "\u{03A9}"),
        ("ohm", "\u{03A9}"),
        ("alpha", "\u{03B1}"),
        ("beta", "\u{03B2}"),
        ("gamma", "\u{03B3}"),
        ("delta", "\u{03B4}"),
        ("epsilon", "\u{03B5}"),
        ("epsi", "\u{03B5}"),
        ("zeta", "\u{03B6}"),
        ("eta", "\u{03B7}"),
        ("theta", "\u{03B8}"),
        ("iota", "\u{03B9}"),
        ("kappa", "\u{03BA}"),
        ("lambda", "\u{03BB}"),
        ("mu", "\u{03BC}"),
        ("nu", "\u{03BD}"),
        ("xi", "\u{03BE}"),
        ("omicron", "\u{03BF}"),
        ("pi", "\u{03C0}"),
        ("rho", "\u{03C1}"),
        ("sigmaf", "\u{03C2}"),
        ("sigmav", "\u{03C2}"),
        ("sigma", "\u{03C3}"),
        ("tau", "\u{03C4}"),
        ("upsilon", "\u{03C5}"),
        ("upsi", "\u{03C5}"),
        ("phi", "\u{03C6}"),
        ("chi", "\u{03C7}"),
        ("psi", "\u{03C8}"),
        ("omega", "\u{03C9}"),
        ("thetasym", "\u{03D1}"),
        ("thetav", "\u{03D1}"),
        ("vartheta", "\u{03D1}"),
        ("upsih", "\u{03D2}"),
        ("phiv", "\u{03D5}"),
        ("varphi", "\u{03D5}"),
        ("straightphi", "\u{03D5}"),
        ("piv", "\u{03D6}"),
        ("varpi", "\u{03D6}"),
        ("epsiv", "\u{03F5}"),
        ("varepsilon", "\u{03F5}"),
        // ASCII punctuation
        ("Tab", "\t"),
        ("NewLine", "\n"),
        ("excl", "!"),
        ("num", "#"),
        ("dollar", "$"),
        ("percnt", "%"),
        ("lpar", "("),
        ("rpar", ")"),
        ("ast", "*"),
        ("midast", "*"),
        ("plus", "+"),
        ("comma", ","),
        ("period", "."),
        ("sol", "/"),
        ("colon", ":"),
        ("semi", ";"),
        ("equals", "="),
        ("quest", "?"),
        ("commat", "@"),
        ("lsqb", "["),
        ("lbrack", "["),
        ("bsol", "\\"),
        ("rsqb", "]"),
        ("rbrack", "]"),
        ("Hat", "^"),
        ("lowbar", "_"),
        ("UnderBar", "_"),
        ("grave", "`"),
        ("DiacriticalGrave", "`"),
        ("lcub", "{"),
        ("lbrace", "{"),
        ("verbar", "|"),
        ("vert", "|"),
        ("VerticalLine", "|"),
        ("rcub", "}"),
        ("rbrace", "}"),
        // General punctuation and spaces
        ("NonBreakingSpace", "\u{00A0}"),
        ("ensp", "\u{2002}"),
        ("emsp", "\u{2003}"),
        ("emsp13", "\u{2004}"),
        ("emsp14", "\u{2005}"),
        ("numsp", "\u{2007}"),
        ("puncsp", "\u{2008}"),
        ("thinsp", "\u{2009}"),
        ("ThinSpace", "\u{2009}"),
        ("hairsp", "\u{200A}"),
        ("VeryThinSpace", "\u{200A}"),
        ("ZeroWidthSpace", "\u{200B}"),
        ("zwnj", "\u{200C}"),
        ("zwj", "\u{200D}"),
        ("lrm", "\u{200E}"),
        ("rlm", "\u{200F}"),
        ("hyphen", "\u{2010}"),
        ("dash", "\u{2010}"),
        ("ndash", "\u{2013}"),
        ("mdash", "\u{2014}"),
        ("horbar", "\u{2015}"),
        ("Verbar", "\u{2016}"),
        ("Vert", "\u{2016}"),
        ("lsquo", "\u{2018}"),
        ("OpenCurlyQuote", "\u{2018}"),
        ("rsquo", "\u{2019}"),
        ("rsquor", "\u{2019}"),
        ("CloseCurlyQuote", "\u{2019}"),
        ("sbquo", "\u{201A}"),
        ("lsquor", "\u{201A}"),
        ("ldquo", "\u{201C}"),
        ("OpenCurlyDoubleQuote", "\u{201C}"),
        ("rdquo", "\u{201D}"),
        ("rdquor", "\u{201D}"),
        ("CloseCurlyDoubleQuote", "\u{201D}"),
        ("bdquo", "\u{201E}"),
        ("ldquor", "\u{201E}"),
        ("dagger", "\u{2020}"),
        ("Dagger", "\u{2021}"),
        ("ddagger", "\u{2021}"),
        ("bull", "\u{2022}"),
        ("bullet", "\u{2022}"),
        ("nldr", "\u{2025}"),
        ("hellip", "\u{2026}"),
        ("mldr", "\u{2026}"),
        ("permil", "\u{2030}"),
        ("pertenk", "\u{2031}"),
        ("prime", "\u{2032}"),
        ("Prime", "\u{2033}"),
        ("lsaquo", "\u{2039}"),
        ("rsaquo", "\u{203A}"),
        ("oline", "\u{203E}"),
        ("caret", "\u{2041}"),
        ("frasl", "\u{2044}"),
        ("MediumSpace", "\u{205F}"),
        ("NoBreak", "\u{2060}"),
        ("euro", "\u{20AC}"),
        // Letterlike symbols
        ("incare", "\u{2105}"),
        ("planck", "\u{210F}"),
        ("hbar", "\u{210F}"),
        ("hslash", "\u{210F}"),
        ("image", "\u{2111}"),
        ("Im", "\u{2111}"),
        ("ell", "\u{2113}"),
        ("numero", "\u{2116}"),
        ("copysr", "\u{2117}"),
        ("weierp", "\u{2118}"),
        ("wp", "\u{2118}"),
        ("real", "\u{211C}"),
        ("Re", "\u{211C}"),
        ("trade", "\u{2122}"),
        ("TRADE", "\u{2122}"),
        ("mho", "\u{2127}"),
        ("angst", "\u{00C5}"),
        ("alefsym", "\u{2135}"),
        ("aleph", "\u{2135}"),
        ("beth", "\u{2136}"),
        ("gimel", "\u{2137}"),
        ("daleth", "\u{2138}"),
        // Vulgar fractions
        ("half", "\u{00BD}"),
        ("frac13", "\u{2153}"),
        ("frac23", "\u{2154}"),
        ("frac15", "\u{2155}"),
        ("frac25", "\u{2156}"),
        ("frac35", "\u{2157}"),
        ("frac45", "\u{2158}"),
        ("frac16", "\u{2159}"),
        ("frac56", "\u{215A}"),
        ("frac18", "\u{215B}"),
        ("frac38", "\u{215C}"),
        ("frac58", "\u{215D}"),
        ("frac78", "\u{215E}"),
        // Arrows
        ("larr", "\u{2190}"),
        ("leftarrow", "\u{2190}"),
        ("LeftArrow", "\u{2190}"),
        ("uarr", "\u{2191}"),
        ("uparrow", "\u{2191}"),
        ("UpArrow", "\u{2191}"),
        ("rarr", "\u{2192}"),
        ("rightarrow", "\u{2192}"),
        ("RightArrow", "\u{2192}"),
        ("darr", "\u{2193}"),
        ("downarrow", "\u{2193}"),
        ("DownArrow", "\u{2193}"),
        ("harr", "\u{2194}"),
        ("leftrightarrow", "\u{2194}"),
        ("LeftRightArrow", "\u{2194}"),
        ("varr", "\u{2195}"),
        ("map", "\u{21A6}"),
        ("crarr", "\u{21B5}"),
        ("lArr", "\u{21D0}"),
        ("Leftarrow", "\u{21D0}"),
        ("uArr", "\u{21D1}"),
        ("Uparrow", "\u{21D1}"),
        ("rArr", "\u{21D2}"),
        ("Rightarrow", "\u{21D2}"),
        ("Implies", "\u{21D2}"),
        ("dArr", "\u{21D3}"),
        ("Downarrow", "\u{21D3}"),
        ("hArr", "\u{21D4}"),
        ("iff", "\u{21D4}"),
        ("Leftrightarrow", "\u{21D4}"),
        // Mathematical operators
        ("forall", "\u{2200}"),
        ("ForAll", "\u{2200}"),
        ("comp", "\u{2201}"),
        ("part", "\u{2202}"),
        ("PartialD", "\u{2202}"),
        ("exist", "\u{2203}"),
        ("Exists", "\u{2203}"),
        ("nexist", "\u{2204}"),
        ("empty", "\u{2205}"),
        ("emptyset", "\u{2205}"),
        ("varnothing", "\u{2205}"),
        ("nabla", "\u{2207}"),
        ("Del", "\u{2207}"),
        ("isin", "\u{2208}"),
        ("isinv", "\u{2208}"),
        ("in", "\u{2208}"),
        ("Element", "\u{2208}"),
        ("notin", "\u{2209}"),
        ("notinva", "\u{2209}"),
        ("NotElement", "\u{2209}"),
        ("ni", "\u{220B}"),
        ("niv", "\u{220B}"),
        ("notni", "\u{220C}"),
        ("prod", "\u{220F}"),
        ("Product", "\u{220F}"),
        ("coprod", "\u{2210}"),
        ("sum", "\u{2211}"),
        ("Sum", "\u{2211}"),
        ("minus", "\u{2212}"),
        ("mnplus", "\u{2213}"),
        ("mp", "\u{2213}"),
        ("plusdo", "\u{2214}"),
        ("setminus", "\u{2216}"),
        ("setmn", "\u{2216}"),
        ("smallsetminus", "\u{2216}"),
        ("lowast", "\u{2217}"),
        ("compfn", "\u{2218}"),
        ("radic", "\u{221A}"),
        ("Sqrt", "\u{221A}"),
        ("prop", "\u{221D}"),
        ("propto", "\u{221D}"),
        ("infin", "\u{221E}"),
        ("ang", "\u{2220}"),
        ("angle", "\u{2220}"),
        ("mid", "\u{2223}"),
        ("nmid", "\u{2224}"),
        ("par", "\u{2225}"),
        ("parallel", "\u{2225}"),
        ("npar", "\u{2226}"),
        ("and", "\u{2227}"),
        ("wedge", "\u{2227}"),
        ("or", "\u{2228}"),
        ("vee", "\u{2228}"),
        ("cap", "\u{2229}"),
        ("cup", "\u{222A}"),
        ("int", "\u{222B}"),
        ("Integral", "\u{222B}"),
        ("Int", "\u{222C}"),
        ("iiint", "\u{222D}"),
        ("conint", "\u{222E}"),
        ("oint", "\u{222E}"),
        ("there4", "\u{2234}"),
        ("therefore", "\u{2234}"),
        ("Therefore", "\u{2234}"),
        ("because", "\u{2235}"),
        ("becaus", "\u{2235}"),
        ("Because", "\u{2235}"),
        ("ratio", "\u{2236}"),
        ("Colon", "\u{2237}"),
        ("Proportion", "\u{2237}"),
        ("minusd", "\u{2238}"),
        ("sim", "\u{223C}"),
        ("Tilde", "\u{223C}"),
        ("thksim", "\u{223C}"),
        ("bsim", "\u{223D}"),
        ("wreath", "\u{2240}"),
        ("wr", "\u{2240}"),
        ("nsim", "\u{2241}"),
        ("sime", "\u{2243}"),
        ("simeq", "\u{2243}"),
        ("cong", "\u{2245}"),
        ("ncong", "\u{2247}"),
        ("asymp", "\u{2248}"),
        ("approx", "\u{2248}"),
        ("ap", "\u{2248}"),
        ("thkap", "\u{2248}"),
        ("nap", "\u{2249}"),
        ("napprox", "\u{2249}"),
        ("ape", "\u{224A}"),
        ("bump", "\u{224E}"),
        ("doteq", "\u{2250}"),
        ("esdot", "\u{2250}"),
        ("ne", "\u{2260}"),
        ("NotEqual", "\u{2260}"),
        ("equiv", "\u{2261}"),
        ("Congruent", "\u{2261}"),
        ("nequiv", "\u{2262}"),
        ("le", "\u{2264}"),
        ("leq", "\u{2264}"),
        ("ge", "\u{2265}"),
        ("geq", "\u{2265}"),
        ("GreaterEqual", "\u{2265}"),
        ("lE", "\u{2266}"),
        ("gE", "\u{2267}"),
        ("ll", "\u{226A}"),
        ("Lt", "\u{226A}"),
        ("gg", "\u{226B}"),
        ("Gt", "\u{226B}"),
        ("nlt", "\u{226E}"),
        ("nless", "\u{226E}"),
        ("ngt", "\u{226F}"),
        ("ngtr", "\u{226F}"),
        ("nle", "\u{2270}"),
        ("nge", "\u{2271}"),
        ("lsim", "\u{2272}"),
        ("gsim", "\u{2273}"),
        ("pr", "\u{227A}"),
        ("prec", "\u{227A}"),
        ("sc", "\u{227B}"),
        ("succ", "\u{227B}"),
        ("sub", "\u{2282}"),
        ("subset", "\u{2282}"),
        ("sup", "\u{2283}"),
        ("supset", "\u{2283}"),
        ("Superset", "\u{2283}"),
        ("nsub", "\u{2284}"),
        ("nsup", "\u{2285}"),
        ("sube", "\u{2286}"),
        ("subseteq", "\u{2286}"),
        ("SubsetEqual", "\u{2286}"),
        ("supe", "\u{2287}"),
        ("supseteq", "\u{2287}"),
        ("SupersetEqual", "\u{2287}"),
        ("nsube", "\u{2288}"),
        ("nsupe", "\u{2289}"),
        ("subne", "\u{228A}"),
        ("supne", "\u{228B}"),
        ("uplus", "\u{228E}"),
        ("oplus", "\u{2295}"),
        ("CirclePlus", "\u{2295}"),
        ("ominus", "\u{2296}"),
        ("CircleMinus", "\u{2296}"),
        ("otimes", "\u{2297}"),
        ("CircleTimes", "\u{2297}"),
        ("osol", "\u{2298}"),
        ("odot", "\u{2299}"),
        ("CircleDot", "\u{2299}"),
        ("vdash", "\u{22A2}"),
        ("dashv", "\u{22A3}"),
        ("top", "\u{22A4}"),
        ("DownTee", "\u{22A4}"),
        ("perp", "\u{22A5}"),
        ("bottom", "\u{22A5}"),
        ("bot", "\u{22A5}"),
        ("UpTee", "\u{22A5}"),
        ("models", "\u{22A7}"),
        ("vDash", "\u{22A8}"),
        ("xwedge", "\u{22C0}"),
        ("Wedge", "\u{22C0}"),
        ("xvee", "\u{22C1}"),
        ("Vee", "\u{22C1}"),
        ("xcap", "\u{22C2}"),
        ("Intersection", "\u{22C2}"),
        ("xcup", "\u{22C3}"),
        ("Union", "\u{22C3}"),
        ("diam", "\u{22C4}"),
        ("diamond", "\u{22C4}"),
        ("Diamond", "\u{22C4}"),
        ("sdot", "\u{22C5}"),
        ("sstarf", "\u{22C6}"),
        ("Star", "\u{22C6}"),
        ("ltimes", "\u{22C9}"),
        ("rtimes", "\u{22CA}"),
        ("vellip", "\u{22EE}"),
        ("ctdot", "\u{22EF}"),
        // Miscellaneous technical
        ("lceil", "\u{2308}"),
        ("LeftCeiling", "\u{2308}"),
        ("rceil", "\u{2309}"),
        ("RightCeiling", "\u{2309}"),
        ("lfloor", "\u{230A}"),
        ("LeftFloor", "\u{230A}"),
        ("rfloor", "\u{230B}"),
        ("RightFloor", "\u{230B}"),
        ("lang", "\u{27E8}"),
        ("langle", "\u{27E8}"),
        ("LeftAngleBracket", "\u{27E8}"),
        ("rang", "\u{27E9}"),
        ("rangle", "\u{27E9}"),
        ("RightAngleBracket", "\u{27E9}"),
        // Shapes and dingbats
        ("squ", "\u{25A1}"),
        ("square", "\u{25A1}"),
        ("Square", "\u{25A1}"),
        ("squf", "\u{25AA}"),
        ("blacksquare", "\u{25AA}"),
        ("utrif", "\u{25B4}"),
        ("blacktriangle", "\u{25B4}"),
        ("utri", "\u{25B5}"),
        ("triangle", "\u{25B5}"),
        ("rtrif", "\u{25B8}"),
        ("rtri", "\u{25B9}"),
        ("dtrif", "\u{25BE}"),
        ("dtri", "\u{25BF}"),
        ("ltrif", "\u{25C2}"),
        ("ltri", "\u{25C3}"),
        ("loz", "\u{25CA}"),
        ("lozenge", "\u{25CA}"),
        ("cir", "\u{25CB}"),
        ("starf", "\u{2605}"),
        ("bigstar", "\u{2605}"),
        ("star", "\u{2606}"),
        ("phone", "\u{260E}"),
        ("female", "\u{2640}"),
        ("male", "\u{2642}"),
        ("spades", "\u{2660}"),
        ("spadesuit", "\u{2660}"),
        ("clubs", "\u{2663}"),
        ("clubsuit", "\u{2663}"),
        ("hearts", "\u{2665}"),
        ("heartsuit", "\u{2665}"),
        ("diams", "\u{2666}"),
        ("diamondsuit", "\u{2666}"),
        ("sung", "\u{266A}"),
        ("flat", "\u{266D}"),
        ("natural", "\u{266E}"),
        ("natur", "\u{266E}"),
        ("sharp", "\u{266F}"),
        ("check", "\u{2713}"),
        ("checkmark", "\u{2713}"),
        ("cross", "\u{2717}"),
        ("malt", "\u{2720}"),
        ("maltese", "\u{2720}"),
        ("sext", "\u{2736}"),
        // Two code points
        ("fjlig", "fj"),
        ("nvlt", "<\u{20D2}"),
        ("nvgt", ">\u{20D2}"),
        ("bne", "=\u{20E5}"),
        ("ThickSpace", "\u{205F}\u{200A}"),
        ("acE", "\u{223E}\u{0333}"),
        ("race", "\u{223D}\u{0331}"),
        ("nang", "\u{2220}\u{20D2}"),
        ("NotEqualTilde", "\u{2242}\u{0338}"),
        ("nesim", "\u{2242}\u{0338}"),
        ("nsubE", "\u{2AC5}\u{0338}"),
        ("nsupE", "\u{2AC6}\u{0338}"),
        ("vnsub", "\u{2282}\u{20D2}"),
        ("vnsup", "\u{2283}\u{20D2}"),
        ("caps", "\u{2229}\u{FE00}"),
        ("cups", "\u{222A}\u{FE00}"),
        ("lates", "\u{2AAD}\u{FE00}"),
    ])
});

/// Entities that browsers still recognize without a trailing semicolon.
///
/// Length of the longest name in [`LEGACY_ENTITIES`] (`frac12`, `middot`, ...).
const LONGEST_LEGACY_NAME: usize = 6;

/// [§ 13.5](https://html.spec.whatwg.org/multipage/named-characters.html#named-character-references):
/// the entries whose name is listed both with and without `;`.
static LEGACY_ENTITIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml", "COPY",
        "Ccedil", "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT", "Iacute", "Icirc",
        "Igrave", "Iuml", "LT", "Ntilde", "Oacute", "Ocirc", "Ograve", "Oslash", "Otilde",
        "Ouml", "QUOT", "REG", "THORN", "Uacute", "Ucirc", "Ugrave", "Uuml", "Yacute",
        "aacute", "acirc", "acute", "aelig", "agrave", "amp", "aring", "atilde", "auml",
        "brvbar", "ccedil", "cedil", "cent", "copy", "curren", "deg", "divide", "eacute",
        "ecirc", "egrave", "eth", "euml", "frac12", "frac14", "frac34", "gt", "iacute",
        "icirc", "iexcl", "igrave", "iquest", "iuml", "laquo", "lt", "macr", "micro",
        "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf", "ordm",
        "oslash", "otilde", "ouml", "para", "plusmn", "pound", "quot", "raquo", "reg",
        "sect", "shy", "sup1", "sup2", "sup3", "szlig", "thorn", "times", "uacute",
        "ucirc", "ugrave", "uml", "uuml", "yacute", "yen", "yuml",
    ])
});

/// Look up a named character reference.
///
/// Returns the replacement text if found. The `name` includes neither the
/// leading `&` nor the trailing `;`, and is case-sensitive.
///
/// # Example
/// ```
/// use lark_html::tokenizer::named_character_references::lookup_entity;
///
/// assert_eq!(lookup_entity("amp"), Some("&"));
/// assert_eq!(lookup_entity("fjlig"), Some("fj"));
/// assert_eq!(lookup_entity("xyz"), None);
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES.get(name).copied()
}

/// Whether the entity may be written without its trailing semicolon
/// (`&copy 2024` still means "© 2024").
#[must_use]
pub fn is_legacy_entity(name: &str) -> bool {
    LEGACY_ENTITIES.contains(name)
}

/// Find the longest legacy entity that `candidate` starts with, returning its
/// name and replacement. `&notit;` resolves to `not` followed by the text `it;`.
#[must_use]
pub fn longest_legacy_prefix(candidate: &str) -> Option<(&str, &'static str)> {
    (1..=candidate.len().min(LONGEST_LEGACY_NAME)).rev().find_map(|len| {
        let prefix = candidate.get(..len)?;
        if is_legacy_entity(prefix) {
            lookup_entity(prefix).map(|value| (prefix, value))
        } else {
            None
        }
    })
}
