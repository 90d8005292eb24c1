//! Named color constants and the palettes used by the official themes.

use crate::types::Color;

/// Fully transparent black, used as "no fill".
pub const TRANSPARENT: Color = Color::rgba_unchecked(0, 0, 0, 0.0);

/// The named CSS colors.
pub mod web {
    use crate::types::Color;

    pub const ALICEBLUE: Color = Color::rgb(240, 248, 255);
    pub const ANTIQUEWHITE: Color = Color::rgb(250, 235, 215);
    pub const AQUA: Color = Color::rgb(0, 255, 255);
    pub const AQUAMARINE: Color = Color::rgb(127, 255, 212);
    pub const AZURE: Color = Color::rgb(240, 255, 255);
    pub const BEIGE: Color = Color::rgb(245, 245, 220);
    pub const BISQUE: Color = Color::rgb(255, 228, 196);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const BLANCHEDALMOND: Color = Color::rgb(255, 235, 205);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const BLUEVIOLET: Color = Color::rgb(138, 43, 226);
    pub const BROWN: Color = Color::rgb(165, 42, 42);
    pub const BURLYWOOD: Color = Color::rgb(222, 184, 135);
    pub const CADETBLUE: Color = Color::rgb(95, 158, 160);
    pub const CHARTREUSE: Color = Color::rgb(127, 255, 0);
    pub const CHOCOLATE: Color = Color::rgb(210, 105, 30);
    pub const CORAL: Color = Color::rgb(255, 127, 80);
    pub const CORNFLOWERBLUE: Color = Color::rgb(100, 149, 237);
    pub const CORNSILK: Color = Color::rgb(255, 248, 220);
    pub const CRIMSON: Color = Color::rgb(220, 20, 60);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const DARKBLUE: Color = Color::rgb(0, 0, 139);
    pub const DARKCYAN: Color = Color::rgb(0, 139, 139);
    pub const DARKGOLDENROD: Color = Color::rgb(184, 134, 11);
    pub const DARKGRAY: Color = Color::rgb(169, 169, 169);
    pub const DARKGREEN: Color = Color::rgb(0, 100, 0);
    pub const DARKGREY: Color = Color::rgb(169, 169, 169);
    pub const DARKKHAKI: Color = Color::rgb(189, 183, 107);
    pub const DARKMAGENTA: Color = Color::rgb(139, 0, 139);
    pub const DARKOLIVEGREEN: Color = Color::rgb(85, 107, 47);
    pub const DARKORANGE: Color = Color::rgb(255, 140, 0);
    pub const DARKORCHID: Color = Color::rgb(153, 50, 204);
    pub const DARKRED: Color = Color::rgb(139, 0, 0);
    pub const DARKSALMON: Color = Color::rgb(233, 150, 122);
    pub const DARKSEAGREEN: Color = Color::rgb(143, 188, 143);
    pub const DARKSLATEBLUE: Color = Color::rgb(72, 61, 139);
    pub const DARKSLATEGRAY: Color = Color::rgb(47, 79, 79);
    pub const DARKSLATEGREY: Color = Color::rgb(47, 79, 79);
    pub const DARKTURQUOISE: Color = Color::rgb(0, 206, 209);
    pub const DARKVIOLET: Color = Color::rgb(148, 0, 211);
    pub const DEEPPINK: Color = Color::rgb(255, 20, 147);
    pub const DEEPSKYBLUE: Color = Color::rgb(0, 191, 255);
    pub const DIMGRAY: Color = Color::rgb(105, 105, 105);
    pub const DIMGREY: Color = Color::rgb(105, 105, 105);
    pub const DODGERBLUE: Color = Color::rgb(30, 144, 255);
    pub const FIREBRICK: Color = Color::rgb(178, 34, 34);
    pub const FLORALWHITE: Color = Color::rgb(255, 250, 240);
    pub const FORESTGREEN: Color = Color::rgb(34, 139, 34);
    pub const FUCHSIA: Color = Color::rgb(255, 0, 255);
    pub const GAINSBORO: Color = Color::rgb(220, 220, 220);
    pub const GHOSTWHITE: Color = Color::rgb(248, 248, 255);
    pub const GOLD: Color = Color::rgb(255, 215, 0);
    pub const GOLDENROD: Color = Color::rgb(218, 165, 32);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const GREENYELLOW: Color = Color::rgb(173, 255, 47);
    pub const GREY: Color = Color::rgb(128, 128, 128);
    pub const HONEYDEW: Color = Color::rgb(240, 255, 240);
    pub const HOTPINK: Color = Color::rgb(255, 105, 180);
    pub const INDIANRED: Color = Color::rgb(205, 92, 92);
    pub const INDIGO: Color = Color::rgb(75, 0, 130);
    pub const IVORY: Color = Color::rgb(255, 255, 240);
    pub const KHAKI: Color = Color::rgb(240, 230, 140);
    pub const LAVENDER: Color = Color::rgb(230, 230, 250);
    pub const LAVENDERBLUSH: Color = Color::rgb(255, 240, 245);
    pub const LAWNGREEN: Color = Color::rgb(124, 252, 0);
    pub const LEMONCHIFFON: Color = Color::rgb(255, 250, 205);
    pub const LIGHTBLUE: Color = Color::rgb(173, 216, 230);
    pub const LIGHTCORAL: Color = Color::rgb(240, 128, 128);
    pub const LIGHTCYAN: Color = Color::rgb(224, 255, 255);
    pub const LIGHTGOLDENRODYELLOW: Color = Color::rgb(250, 250, 210);
    pub const LIGHTGRAY: Color = Color::rgb(211, 211, 211);
    pub const LIGHTGREEN: Color = Color::rgb(144, 238, 144);
    pub const LIGHTGREY: Color = Color::rgb(211, 211, 211);
    pub const LIGHTPINK: Color = Color::rgb(255, 182, 193);
    pub const LIGHTSALMON: Color = Color::rgb(255, 160, 122);
    pub const LIGHTSEAGREEN: Color = Color::rgb(32, 178, 170);
    pub const LIGHTSKYBLUE: Color = Color::rgb(135, 206, 250);
    pub const LIGHTSLATEGRAY: Color = Color::rgb(119, 136, 153);
    pub const LIGHTSLATEGREY: Color = Color::rgb(119, 136, 153);
    pub const LIGHTSTEELBLUE: Color = Color::rgb(176, 196, 222);
    pub const LIGHTYELLOW: Color = Color::rgb(255, 255, 224);
    pub const LIME: Color = Color::rgb(0, 255, 0);
    pub const LIMEGREEN: Color = Color::rgb(50, 205, 50);
    pub const LINEN: Color = Color::rgb(250, 240, 230);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const MAROON: Color = Color::rgb(128, 0, 0);
    pub const MEDIUMAQUAMARINE: Color = Color::rgb(102, 205, 170);
    pub const MEDIUMBLUE: Color = Color::rgb(0, 0, 205);
    pub const MEDIUMORCHID: Color = Color::rgb(186, 85, 211);
    pub const MEDIUMPURPLE: Color = Color::rgb(147, 112, 219);
    pub const MEDIUMSEAGREEN: Color = Color::rgb(60, 179, 113);
    pub const MEDIUMSLATEBLUE: Color = Color::rgb(123, 104, 238);
    pub const MEDIUMSPRINGGREEN: Color = Color::rgb(0, 250, 154);
    pub const MEDIUMTURQUOISE: Color = Color::rgb(72, 209, 204);
    pub const MEDIUMVIOLETRED: Color = Color::rgb(199, 21, 133);
    pub const MIDNIGHTBLUE: Color = Color::rgb(25, 25, 112);
    pub const MINTCREAM: Color = Color::rgb(245, 255, 250);
    pub const MISTYROSE: Color = Color::rgb(255, 228, 225);
    pub const MOCCASIN: Color = Color::rgb(255, 228, 181);
    pub const NAVAJOWHITE: Color = Color::rgb(255, 222, 173);
    pub const NAVY: Color = Color::rgb(0, 0, 128);
    pub const OLDLACE: Color = Color::rgb(253, 245, 230);
    pub const OLIVE: Color = Color::rgb(128, 128, 0);
    pub const OLIVEDRAB: Color = Color::rgb(107, 142, 35);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const ORANGERED: Color = Color::rgb(255, 69, 0);
    pub const ORCHID: Color = Color::rgb(218, 112, 214);
    pub const PALEGOLDENROD: Color = Color::rgb(238, 232, 170);
    pub const PALEGREEN: Color = Color::rgb(152, 251, 152);
    pub const PALETURQUOISE: Color = Color::rgb(175, 238, 238);
    pub const PALEVIOLETRED: Color = Color::rgb(219, 112, 147);
    pub const PAPAYAWHIP: Color = Color::rgb(255, 239, 213);
    pub const PEACHPUFF: Color = Color::rgb(255, 218, 185);
    pub const PERU: Color = Color::rgb(205, 133, 63);
    pub const PINK: Color = Color::rgb(255, 192, 203);
    pub const PLUM: Color = Color::rgb(221, 160, 221);
    pub const POWDERBLUE: Color = Color::rgb(176, 224, 230);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const REBECCAPURPLE: Color = Color::rgb(102, 51, 153);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const ROSYBROWN: Color = Color::rgb(188, 143, 143);
    pub const ROYALBLUE: Color = Color::rgb(65, 105, 225);
    pub const SADDLEBROWN: Color = Color::rgb(139, 69, 19);
    pub const SALMON: Color = Color::rgb(250, 128, 114);
    pub const SANDYBROWN: Color = Color::rgb(244, 164, 96);
    pub const SEAGREEN: Color = Color::rgb(46, 139, 87);
    pub const SEASHELL: Color = Color::rgb(255, 245, 238);
    pub const SIENNA: Color = Color::rgb(160, 82, 45);
    pub const SILVER: Color = Color::rgb(192, 192, 192);
    pub const SKYBLUE: Color = Color::rgb(135, 206, 235);
    pub const SLATEBLUE: Color = Color::rgb(106, 90, 205);
    pub const SLATEGRAY: Color = Color::rgb(112, 128, 144);
    pub const SLATEGREY: Color = Color::rgb(112, 128, 144);
    pub const SNOW: Color = Color::rgb(255, 250, 250);
    pub const SPRINGGREEN: Color = Color::rgb(0, 255, 127);
    pub const STEELBLUE: Color = Color::rgb(70, 130, 180);
    pub const TAN: Color = Color::rgb(210, 180, 140);
    pub const TEAL: Color = Color::rgb(0, 128, 128);
    pub const THISTLE: Color = Color::rgb(216, 191, 216);
    pub const TOMATO: Color = Color::rgb(255, 99, 71);
    pub const TURQUOISE: Color = Color::rgb(64, 224, 208);
    pub const VIOLET: Color = Color::rgb(238, 130, 238);
    pub const WHEAT: Color = Color::rgb(245, 222, 179);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const WHITESMOKE: Color = Color::rgb(245, 245, 245);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const YELLOWGREEN: Color = Color::rgb(154, 205, 50);

    /// Every named color by its lowercase CSS name, alphabetically.
    pub const NAMED: &[(&str, Color)] = &[
        ("aliceblue", ALICEBLUE),
        ("antiquewhite", ANTIQUEWHITE),
        ("aqua", AQUA),
        ("aquamarine", AQUAMARINE),
        ("azure", AZURE),
        ("beige", BEIGE),
        ("bisque", BISQUE),
        ("black", BLACK),
        ("blanchedalmond", BLANCHEDALMOND),
        ("blue", BLUE),
        ("blueviolet", BLUEVIOLET),
        ("brown", BROWN),
        ("burlywood", BURLYWOOD),
        ("cadetblue", CADETBLUE),
        ("chartreuse", CHARTREUSE),
        ("chocolate", CHOCOLATE),
        ("coral", CORAL),
        ("cornflowerblue", CORNFLOWERBLUE),
        ("cornsilk", CORNSILK),
        ("crimson", CRIMSON),
        ("cyan", CYAN),
        ("darkblue", DARKBLUE),
        ("darkcyan", DARKCYAN),
        ("darkgoldenrod", DARKGOLDENROD),
        ("darkgray", DARKGRAY),
        ("darkgreen", DARKGREEN),
        ("darkgrey", DARKGREY),
        ("darkkhaki", DARKKHAKI),
        ("darkmagenta", DARKMAGENTA),
        ("darkolivegreen", DARKOLIVEGREEN),
        ("darkorange", DARKORANGE),
        ("darkorchid", DARKORCHID),
        ("darkred", DARKRED),
        ("darksalmon", DARKSALMON),
        ("darkseagreen", DARKSEAGREEN),
        ("darkslateblue", DARKSLATEBLUE),
        ("darkslategray", DARKSLATEGRAY),
        ("darkslategrey", DARKSLATEGREY),
        ("darkturquoise", DARKTURQUOISE),
        ("darkviolet", DARKVIOLET),
        ("deeppink", DEEPPINK),
        ("deepskyblue", DEEPSKYBLUE),
        ("dimgray", DIMGRAY),
        ("dimgrey", DIMGREY),
        ("dodgerblue", DODGERBLUE),
        ("firebrick", FIREBRICK),
        ("floralwhite", FLORALWHITE),
        ("forestgreen", FORESTGREEN),
        ("fuchsia", FUCHSIA),
        ("gainsboro", GAINSBORO),
        ("ghostwhite", GHOSTWHITE),
        ("gold", GOLD),
        ("goldenrod", GOLDENROD),
        ("gray", GRAY),
        ("green", GREEN),
        ("greenyellow", GREENYELLOW),
        ("grey", GREY),
        ("honeydew", HONEYDEW),
        ("hotpink", HOTPINK),
        ("indianred", INDIANRED),
        ("indigo", INDIGO),
        ("ivory", IVORY),
        ("khaki", KHAKI),
        ("lavender", LAVENDER),
        ("lavenderblush", LAVENDERBLUSH),
        ("lawngreen", LAWNGREEN),
        ("lemonchiffon", LEMONCHIFFON),
        ("lightblue", LIGHTBLUE),
        ("lightcoral", LIGHTCORAL),
        ("lightcyan", LIGHTCYAN),
        ("lightgoldenrodyellow", LIGHTGOLDENRODYELLOW),
        ("lightgray", LIGHTGRAY),
        ("lightgreen", LIGHTGREEN),
        ("lightgrey", LIGHTGREY),
        ("lightpink", LIGHTPINK),
        ("lightsalmon", LIGHTSALMON),
        ("lightseagreen", LIGHTSEAGREEN),
        ("lightskyblue", LIGHTSKYBLUE),
        ("lightslategray", LIGHTSLATEGRAY),
        ("lightslategrey", LIGHTSLATEGREY),
        ("lightsteelblue", LIGHTSTEELBLUE),
        ("lightyellow", LIGHTYELLOW),
        ("lime", LIME),
        ("limegreen", LIMEGREEN),
        ("linen", LINEN),
        ("magenta", MAGENTA),
        ("maroon", MAROON),
        ("mediumaquamarine", MEDIUMAQUAMARINE),
        ("mediumblue", MEDIUMBLUE),
        ("mediumorchid", MEDIUMORCHID),
        ("mediumpurple", MEDIUMPURPLE),
        ("mediumseagreen", MEDIUMSEAGREEN),
        ("mediumslateblue", MEDIUMSLATEBLUE),
        ("mediumspringgreen", MEDIUMSPRINGGREEN),
        ("mediumturquoise", MEDIUMTURQUOISE),
        ("mediumvioletred", MEDIUMVIOLETRED),
        ("midnightblue", MIDNIGHTBLUE),
        ("mintcream", MINTCREAM),
        ("mistyrose", MISTYROSE),
        ("moccasin", MOCCASIN),
        ("navajowhite", NAVAJOWHITE),
        ("navy", NAVY),
        ("oldlace", OLDLACE),
        ("olive", OLIVE),
        ("olivedrab", OLIVEDRAB),
        ("orange", ORANGE),
        ("orangered", ORANGERED),
        ("orchid", ORCHID),
        ("palegoldenrod", PALEGOLDENROD),
        ("palegreen", PALEGREEN),
        ("paleturquoise", PALETURQUOISE),
        ("palevioletred", PALEVIOLETRED),
        ("papayawhip", PAPAYAWHIP),
        ("peachpuff", PEACHPUFF),
        ("peru", PERU),
        ("pink", PINK),
        ("plum", PLUM),
        ("powderblue", POWDERBLUE),
        ("purple", PURPLE),
        ("rebeccapurple", REBECCAPURPLE),
        ("red", RED),
        ("rosybrown", ROSYBROWN),
        ("royalblue", ROYALBLUE),
        ("saddlebrown", SADDLEBROWN),
        ("salmon", SALMON),
        ("sandybrown", SANDYBROWN),
        ("seagreen", SEAGREEN),
        ("seashell", SEASHELL),
        ("sienna", SIENNA),
        ("silver", SILVER),
        ("skyblue", SKYBLUE),
        ("slateblue", SLATEBLUE),
        ("slategray", SLATEGRAY),
        ("slategrey", SLATEGREY),
        ("snow", SNOW),
        ("springgreen", SPRINGGREEN),
        ("steelblue", STEELBLUE),
        ("tan", TAN),
        ("teal", TEAL),
        ("thistle", THISTLE),
        ("tomato", TOMATO),
        ("turquoise", TURQUOISE),
        ("violet", VIOLET),
        ("wheat", WHEAT),
        ("white", WHITE),
        ("whitesmoke", WHITESMOKE),
        ("yellow", YELLOW),
        ("yellowgreen", YELLOWGREEN),
    ];

    /// Look up a CSS color name, ignoring ASCII case.
    pub fn named(name: &str) -> Option<Color> {
        let name = name.to_ascii_lowercase();
        NAMED
            .binary_search_by(|(n, _)| n.cmp(&name.as_str()))
            .ok()
            .map(|i| NAMED[i].1)
    }
}

/// Colors of the "essentials" theme.
pub mod essentials {
    use crate::types::Color;

    pub const RED: Color = Color::rgb(255, 23, 23);
    pub const LIGHTRED: Color = Color::rgb(239, 95, 95);
    pub const PINK: Color = Color::rgb(239, 63, 239);
    pub const BROWN: Color = Color::rgb(159, 31, 31);
    pub const ORANGE: Color = Color::rgb(255, 95, 31);
    pub const GREEN: Color = Color::rgb(15, 127, 15);
    pub const LIGHTGREEN: Color = Color::rgb(79, 191, 79);
    pub const GREENYELLOW: Color = Color::rgb(127, 207, 31);
    pub const TEAL: Color = Color::rgb(15, 127, 127);
    pub const OLIVE: Color = Color::rgb(127, 127, 31);
    pub const BLUE: Color = Color::rgb(31, 31, 255);
    pub const LIGHTBLUE: Color = Color::rgb(111, 111, 239);
    pub const AQUA: Color = Color::rgb(47, 239, 239);
    pub const NAVY: Color = Color::rgb(15, 15, 127);
    pub const STEEL: Color = Color::rgb(96, 96, 143);
    pub const YELLOW: Color = Color::rgb(239, 239, 31);
    pub const PURPLE: Color = Color::rgb(127, 31, 127);
    pub const IVORY: Color = Color::rgb(239, 239, 207);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const CHARCOAL: Color = Color::rgb(39, 39, 39);
    pub const GRAPHITE: Color = Color::rgb(63, 63, 63);
    pub const GRAY: Color = Color::rgb(127, 127, 127);
    pub const SILVER: Color = Color::rgb(191, 191, 191);
    pub const SNOW: Color = Color::rgb(239, 239, 239);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Palette order as registered by the theme.
    pub const PALETTE: &[(&str, Color)] = &[
        ("red", RED),
        ("lightred", LIGHTRED),
        ("pink", PINK),
        ("brown", BROWN),
        ("orange", ORANGE),
        ("green", GREEN),
        ("lightgreen", LIGHTGREEN),
        ("greenyellow", GREENYELLOW),
        ("teal", TEAL),
        ("olive", OLIVE),
        ("blue", BLUE),
        ("lightblue", LIGHTBLUE),
        ("aqua", AQUA),
        ("navy", NAVY),
        ("steel", STEEL),
        ("yellow", YELLOW),
        ("purple", PURPLE),
        ("ivory", IVORY),
        ("black", BLACK),
        ("charcoal", CHARCOAL),
        ("graphite", GRAPHITE),
        ("gray", GRAY),
        ("silver", SILVER),
        ("snow", SNOW),
        ("white", WHITE),
    ];
}

/// Colors of the "default" theme (softer red/green/blue).
pub mod default_theme {
    use super::essentials;
    use crate::types::Color;

    pub const RED: Color = essentials::LIGHTRED;
    pub const GREEN: Color = essentials::LIGHTGREEN;
    pub const BLUE: Color = essentials::LIGHTBLUE;
    pub const BLACK: Color = essentials::BLACK;
    pub const WHITE: Color = essentials::WHITE;

    pub const PALETTE: &[(&str, Color)] = &[
        ("red", RED),
        ("green", GREEN),
        ("blue", BLUE),
        ("black", BLACK),
        ("white", WHITE),
    ];
}

/// Colors of the "monochrome" theme.
pub mod monochrome {
    use super::essentials;
    use crate::types::Color;

    pub const BLACK: Color = essentials::BLACK;
    pub const CHARCOAL: Color = essentials::CHARCOAL;
    pub const GRAPHITE: Color = essentials::GRAPHITE;
    pub const GRAY: Color = essentials::GRAY;
    pub const SILVER: Color = essentials::SILVER;
    pub const SNOW: Color = essentials::SNOW;
    pub const WHITE: Color = essentials::WHITE;

    pub const PALETTE: &[(&str, Color)] = &[
        ("black", BLACK),
        ("charcoal", CHARCOAL),
        ("graphite", GRAPHITE),
        ("gray", GRAY),
        ("silver", SILVER),
        ("snow", SNOW),
        ("white", WHITE),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_is_zero_alpha() {
        assert!(TRANSPARENT.is_transparent());
        assert!(!web::BLACK.is_transparent());
    }

    #[test]
    fn palettes_have_unique_names() {
        for palette in [essentials::PALETTE, default_theme::PALETTE, monochrome::PALETTE] {
            let mut names: Vec<_> = palette.iter().map(|(name, _)| *name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), palette.len());
        }
    }

    #[test]
    fn web_names_are_sorted_and_resolve() {
        assert_eq!(web::NAMED.len(), 148);
        assert!(web::NAMED.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(web::named("CornflowerBlue"), Some(web::CORNFLOWERBLUE));
        assert_eq!(web::named("aliceblue"), Some(Color::rgb(240, 248, 255)));
        assert_eq!(web::named("grey"), web::named("gray"));
        assert_eq!(web::named("blurple"), None);
    }
}
