//! Character maps for each region's text encoding.
//!
//! The maps are reverse-engineered and incomplete. Bytes missing from them
//! decode to `[0xNN]` literals.

pub fn codec(charset: &[(&[u8], &str)]) -> crate::msg::Codec {
    crate::msg::Codec::builder()
        .add_stop_rule(&[crate::msg::TERMINATOR])
        .add_charset_rules(charset)
        .build()
}

#[rustfmt::skip]
pub static NORTH_AMERICA_EUROPE: &[(&[u8], &str)] = &[
    (b"\x00", "0"),
    (b"\x01", "1"),
    (b"\x02", "2"),
    (b"\x03", "3"),
    (b"\x04", "4"),
    (b"\x05", "5"),
    (b"\x06", "6"),
    (b"\x07", "7"),
    (b"\x08", "8"),
    (b"\x09", "9"),
    (b"\x0a", " "),
    (b"\x0b", "A"),
    (b"\x0c", "B"),
    (b"\x0d", "C"),
    (b"\x0e", "D"),
    (b"\x0f", "E"),
    (b"\x10", "F"),
    (b"\x11", "G"),
    (b"\x12", "H"),
    (b"\x13", "I"),
    (b"\x14", "J"),
    (b"\x15", "K"),
    (b"\x16", "L"),
    (b"\x17", "M"),
    (b"\x18", "N"),
    (b"\x19", "O"),
    (b"\x1a", "P"),
    (b"\x1b", "Q"),
    (b"\x1c", "R"),
    (b"\x1d", "S"),
    (b"\x1e", "T"),
    (b"\x1f", "U"),
    (b"\x20", "V"),
    (b"\x21", "W"),
    (b"\x22", "X"),
    (b"\x23", "Y"),
    (b"\x24", "Z"),
    (b"\x25", "a"),
    (b"\x26", "b"),
    (b"\x27", "c"),
    (b"\x28", "d"),
    (b"\x29", "e"),
    (b"\x2a", "f"),
    (b"\x2b", "g"),
    (b"\x2c", "h"),
    (b"\x2d", "i"),
    (b"\x2e", "j"),
    (b"\x2f", "k"),
    (b"\x30", "l"),
    (b"\x31", "m"),
    (b"\x32", "n"),
    (b"\x33", "o"),
    (b"\x34", "p"),
    (b"\x35", "q"),
    (b"\x36", "r"),
    (b"\x37", "s"),
    (b"\x38", "t"),
    (b"\x39", "u"),
    (b"\x3a", "v"),
    (b"\x3b", "w"),
    (b"\x3c", "x"),
    (b"\x3d", "y"),
    (b"\x3e", "z"),
    (b"\x55", "Ü"),
    (b"\x57", "á"),
    (b"\x70", "!"),
    (b"\x71", "?"),
    (b"\x87", "+"),
    (b"\x8d", "Ⅱ"),
    (b"\x8e", "Ⅲ"),
    (b"\x9a", "‘"),
    (b"\x9b", "’"),
    (b"\xac", "."),
    (b"\xad", "&"),
    (b"\xcc", "-"),
    (b"\xcd", ","),
    (b"\xfe", "\\n"),
];

#[rustfmt::skip]
pub static JAPAN: &[(&[u8], &str)] = &[
    (b"\x00", "0"),
    (b"\x01", "1"),
    (b"\x02", "2"),
    (b"\x03", "3"),
    (b"\x04", "4"),
    (b"\x05", "5"),
    (b"\x06", "6"),
    (b"\x07", "7"),
    (b"\x08", "8"),
    (b"\x09", "9"),
    (b"\x0a", "A"),
    (b"\x0b", "B"),
    (b"\x0c", "C"),
    (b"\x0d", "D"),
    (b"\x0e", "E"),
    (b"\x0f", "F"),
    (b"\x10", "G"),
    (b"\x11", "H"),
    (b"\x12", "I"),
    (b"\x13", "J"),
    (b"\x14", "K"),
    (b"\x15", "L"),
    (b"\x16", "M"),
    (b"\x17", "N"),
    (b"\x18", "O"),
    (b"\x19", "P"),
    (b"\x1a", "Q"),
    (b"\x1b", "R"),
    (b"\x1c", "S"),
    (b"\x1d", "T"),
    (b"\x1e", "U"),
    (b"\x1f", "V"),
    (b"\x20", "W"),
    (b"\x21", "X"),
    (b"\x22", "Y"),
    (b"\x23", "Z"),
    (b"\x24", "あ"),
    (b"\x25", "ぁ"),
    (b"\x26", "い"),
    (b"\x27", "ぃ"),
    (b"\x28", "う"),
    (b"\x29", "ぅ"),
    (b"\x2a", "え"),
    (b"\x2b", "ぇ"),
    (b"\x2c", "お"),
    (b"\x2d", "ぉ"),
    (b"\x2e", "か"),
    (b"\x92\x2e", "が"),
    (b"\x2f", "き"),
    (b"\x92\x2f", "ぎ"),
    (b"\x30", "く"),
    (b"\x92\x30", "ぐ"),
    (b"\x31", "け"),
    (b"\x92\x31", "げ"),
    (b"\x32", "こ"),
    (b"\x92\x32", "ご"),
    (b"\x33", "さ"),
    (b"\x92\x33", "ざ"),
    (b"\x34", "し"),
    (b"\x92\x34", "じ"),
    (b"\x35", "す"),
    (b"\x92\x35", "ず"),
    (b"\x36", "せ"),
    (b"\x92\x36", "ぜ"),
    (b"\x37", "そ"),
    (b"\x92\x37", "ぞ"),
    (b"\x38", "た"),
    (b"\x92\x38", "だ"),
    (b"\x39", "ち"),
    (b"\x92\x39", "ぢ"),
    (b"\x3a", "つ"),
    (b"\x92\x3a", "づ"),
    (b"\x3b", "っ"),
    (b"\x3c", "て"),
    (b"\x92\x3c", "で"),
    (b"\x3d", "と"),
    (b"\x92\x3d", "ど"),
    (b"\x3e", "な"),
    (b"\x3f", "に"),
    (b"\x40", "ぬ"),
    (b"\x41", "ね"),
    (b"\x42", "の"),
    (b"\x43", "は"),
    (b"\x92\x43", "ば"),
    (b"\x93\x43", "ぱ"),
    (b"\x44", "ひ"),
    (b"\x92\x44", "び"),
    (b"\x93\x44", "ぴ"),
    (b"\x45", "ふ"),
    (b"\x92\x45", "ぶ"),
    (b"\x93\x45", "ぷ"),
    (b"\x46", "へ"),
    (b"\x92\x46", "べ"),
    (b"\x93\x46", "ぺ"),
    (b"\x47", "ほ"),
    (b"\x92\x47", "ぼ"),
    (b"\x93\x47", "ぽ"),
    (b"\x48", "ま"),
    (b"\x49", "み"),
    (b"\x4a", "む"),
    (b"\x4b", "め"),
    (b"\x4c", "も"),
    (b"\x4d", "や"),
    (b"\x4e", "ゃ"),
    (b"\x4f", "ゆ"),
    (b"\x50", "ゅ"),
    (b"\x51", "よ"),
    (b"\x52", "ょ"),
    (b"\x53", "ら"),
    (b"\x54", "り"),
    (b"\x55", "る"),
    (b"\x56", "れ"),
    (b"\x57", "ろ"),
    (b"\x58", "わ"),
    (b"\x59", "を"),
    (b"\x5a", "ん"),
    (b"\x5b", "ア"),
    (b"\x5c", "ァ"),
    (b"\x5d", "イ"),
    (b"\x5e", "ィ"),
    (b"\x5f", "ウ"),
    (b"\x5f", "ウ"),
    (b"\x60", "ゥ"),
    (b"\x61", "エ"),
    (b"\x62", "ェ"),
    (b"\x63", "オ"),
    (b"\x64", "ォ"),
    (b"\x65", "カ"),
    (b"\x92\x65", "ガ"),
    (b"\x66", "キ"),
    (b"\x92\x66", "ギ"),
    (b"\x67", "ク"),
    (b"\x92\x67", "グ"),
    (b"\x68", "ケ"),
    (b"\x92\x68", "ゲ"),
    (b"\x69", "コ"),
    (b"\x92\x69", "ゴ"),
    (b"\x6a", "サ"),
    (b"\x92\x6a", "ザ"),
    (b"\x6b", "シ"),
    (b"\x92\x6b", "ジ"),
    (b"\x6c", "ス"),
    (b"\x92\x6c", "ズ"),
    (b"\x6d", "セ"),
    (b"\x92\x6d", "ゼ"),
    (b"\x6e", "ソ"),
    (b"\x92\x6e", "ゾ"),
    (b"\x6f", "タ"),
    (b"\x92\x6f", "ダ"),
    (b"\x70", "チ"),
    (b"\x92\x70", "ヂ"),
    (b"\x71", "ツ"),
    (b"\x92\x71", "ヅ"),
    (b"\x93\x71", "ツ゚"),
    (b"\x72", "ッ"),
    (b"\x73", "テ"),
    (b"\x92\x73", "デ"),
    (b"\x74", "ト"),
    (b"\x92\x74", "ド"),
    (b"\x93\x74", "ト゚"),
    (b"\x75", "ナ"),
    (b"\x76", "ニ"),
    (b"\x77", "ヌ"),
    (b"\x78", "ネ"),
    (b"\x79", "ノ"),
    (b"\x7a", "ハ"),
    (b"\x92\x7a", "バ"),
    (b"\x93\x7a", "パ"),
    (b"\x7b", "ヒ"),
    (b"\x92\x7b", "ビ"),
    (b"\x93\x7b", "ピ"),
    (b"\x7c", "フ"),
    (b"\x92\x7c", "ブ"),
    (b"\x93\x7c", "プ"),
    (b"\x7d", "ヘ"),
    (b"\x92\x7d", "ベ"),
    (b"\x93\x7d", "ペ"),
    (b"\x7e", "ホ"),
    (b"\x92\x7e", "ボ"),
    (b"\x93\x7e", "ポ"),
    (b"\x7f", "マ"),
    (b"\x80", "ミ"),
    (b"\x81", "ム"),
    (b"\x82", "メ"),
    (b"\x83", "モ"),
    (b"\x84", "ヤ"),
    (b"\x85", "ャ"),
    (b"\x86", "ユ"),
    (b"\x87", "ュ"),
    (b"\x88", "ヨ"),
    (b"\x89", "ョ"),
    (b"\x8a", "ラ"),
    (b"\x8b", "リ"),
    (b"\x8c", "ル"),
    (b"\x8d", "レ"),
    (b"\x8e", "ロ"),
    (b"\x8f", "ワ"),
    (b"\x90", "ヲ"),
    (b"\x91", "ン"),
    (b"\x94", "。"),
    (b"\x95", "「"),
    (b"\x96", "」"),
    (b"\x97", "『"),
    (b"\x98", "』"),
    (b"\x99", "“"),
    (b"\x9a", "”"),
    (b"\x9b", "?"),
    (b"\x9c", "!"),
    (b"\x9d", "𝅘𝅥𝅮"),
    (b"\x9e", "♥"),
    (b"\xa0", "."),
    (b"\xa1", "ー"),
    (b"\xa2", "~"),
    (b"\xa3", "/"),
    (b"\xa4", "*"),
    (b"\xa5", "("),
    (b"\xa6", ")"),
    (b"\xa7", "+"),
    (b"\xa8", ":"),
    (b"\xa9", "…"),
    (b"\xbf", " "),
    (b"\xb6", "島"),
    (b"\xbb", "&"),
    (b"\xe0\x00", "引"),
    (b"\xe0\x01", "炎"),
    (b"\xe0\x02", "何"),
    (b"\xe0\x03", "岩"),
    (b"\xe0\x04", "技"),
    (b"\xe0\x05", "均"),
    (b"\xe0\x06", "空"),
    (b"\xe0\x07", "経"),
    (b"\xe0\x08", "験"),
    (b"\xe0\x09", "言"),
    (b"\xe0\x0a", "光"),
    (b"\xe0\x0b", "死"),
    (b"\xe0\x0c", "守"),
    (b"\xe0\x0d", "呪"),
    (b"\xe0\x0e", "終"),
    (b"\xe0\x0f", "石"),
    (b"\xe0\x10", "息"),
    (b"\xe0\x11", "値"),
    (b"\xe0\x12", "天"),
    (b"\xe0\x13", "箱"),
    (b"\xe0\x14", "風"),
    (b"\xe0\x15", "文"),
    (b"\xe0\x16", "平"),
    (b"\xe0\x17", "雷"),
    (b"\xe0\x18", "了"),
    (b"\xe0\x19", "園"),
    (b"\xe0\x1a", "期"),
    (b"\xe0\x1b", "定"),
    (b"\xe0\x1c", "品"),
    (b"\xe0\x1d", "賞"),
    (b"\xe0\x1e", "紹"),
    (b"\xe0\x1f", "信"),
    (b"\xe0\x20", "介"),
    (b"\xe0\x21", "束"),
    (b"\xe0\x22", "団"),
    (b"\xe0\x23", "使"),
    (b"\xe0\x24", "待"),
    (b"\xe0\x25", "門"),
    (b"\xe0\x26", "約"),
    (b"\xe0\x27", "分"),
    (b"\xe0\x28", "安"),
    (b"\xe0\x29", "位"),
    (b"\xe0\x2a", "意"),
    (b"\xe0\x2b", "異"),
    (b"\xe0\x2c", "一"),
    (b"\xe0\x2d", "員"),
    (b"\xe0\x2e", "加"),
    (b"\xe0\x2f", "果"),
    (b"\xe0\x30", "過"),
    (b"\xe0\x31", "我"),
    (b"\xe0\x32", "画"),
    (b"\xe0\x33", "会"),
    (b"\xe0\x34", "回"),
    (b"\xe0\x35", "界"),
    (b"\xe0\x36", "開"),
    (b"\xe0\x37", "外"),
    (b"\xe0\x38", "格"),
    (b"\xe0\x39", "覚"),
    (b"\xe0\x3a", "完"),
    (b"\xe0\x3b", "間"),
    (b"\xe0\x3c", "関"),
    (b"\xe0\x3d", "気"),
    (b"\xe0\x3e", "記"),
    (b"\xe0\x3f", "儀"),
    (b"\xe0\x40", "究"),
    (b"\xe0\x41", "協"),
    (b"\xe0\x42", "強"),
    (b"\xe0\x43", "苦"),
    (b"\xe0\x44", "君"),
    (b"\xe0\x45", "係"),
    (b"\xe0\x46", "計"),
    (b"\xe0\x47", "決"),
    (b"\xe0\x48", "血"),
    (b"\xe0\x49", "研"),
    (b"\xe0\x4a", "見"),
    (b"\xe0\x4b", "後"),
    (b"\xe0\x4c", "向"),
    (b"\xe0\x4d", "工"),
    (b"\xe0\x4e", "行"),
    (b"\xe0\x4f", "合"),
    (b"\xe0\x50", "告"),
    (b"\xe0\x51", "今"),
    (b"\xe0\x52", "最"),
    (b"\xe0\x53", "災"),
    (b"\xe0\x54", "祭"),
    (b"\xe0\x55", "在"),
    (b"\xe0\x56", "作"),
    (b"\xe0\x57", "参"),
    (b"\xe0\x58", "山"),
    (b"\xe0\x59", "仕"),
    (b"\xe0\x5a", "始"),
    (b"\xe0\x5b", "姿"),
    (b"\xe0\x5c", "指"),
    (b"\xe0\x5d", "私"),
    (b"\xe0\x5e", "試"),
    (b"\xe0\x5f", "事"),
    (b"\xe0\x60", "時"),
    (b"\xe0\x61", "次"),
    (b"\xe0\x62", "自"),
    (b"\xe0\x63", "式"),
    (b"\xe0\x64", "者"),
    (b"\xe0\x65", "手"),
    (b"\xe0\x66", "種"),
    (b"\xe0\x67", "獣"),
    (b"\xe0\x68", "出"),
    (b"\xe0\x69", "準"),
    (b"\xe0\x6a", "初"),
    (b"\xe0\x6b", "所"),
    (b"\xe0\x6c", "勝"),
    (b"\xe0\x6d", "上"),
    (b"\xe0\x6e", "場"),
    (b"\xe0\x6f", "織"),
    (b"\xe0\x70", "心"),
    (b"\xe0\x71", "真"),
    (b"\xe0\x72", "神"),
    (b"\xe0\x73", "身"),
    (b"\xe0\x74", "進"),
    (b"\xe0\x75", "人"),
    (b"\xe0\x76", "世"),
    (b"\xe0\x77", "性"),
    (b"\xe0\x78", "生"),
    (b"\xe0\x79", "聖"),
    (b"\xe0\x7a", "説"),
    (b"\xe0\x7b", "先"),
    (b"\xe0\x7c", "戦"),
    (b"\xe0\x7d", "選"),
    (b"\xe0\x7e", "前"),
    (b"\xe0\x7f", "[0xe0][0x7f]"),
    (b"\xe0\x80", "祖"),
    (b"\xe0\x81", "組"),
    (b"\xe0\x82", "掃"),
    (b"\xe0\x83", "早"),
    (b"\xe0\x84", "相"),
    (b"\xe0\x85", "族"),
    (b"\xe0\x86", "続"),
    (b"\xe0\x87", "存"),
    (b"\xe0\x88", "体"),
    (b"\xe0\x89", "対"),
    (b"\xe0\x8a", "退"),
    (b"\xe0\x8b", "大"),
    (b"\xe0\x8c", "第"),
    (b"\xe0\x8d", "男"),
    (b"\xe0\x8e", "地"),
    (b"\xe0\x8f", "着"),
    (b"\xe0\x90", "中"),
    (b"\xe0\x91", "仲"),
    (b"\xe0\x92", "長"),
    (b"\xe0\x93", "頂"),
    (b"\xe0\x94", "通"),
    (b"\xe0\x95", "的"),
    (b"\xe0\x96", "点"),
    (b"\xe0\x97", "伝"),
    (b"\xe0\x98", "登"),
    (b"\xe0\x99", "度"),
    (b"\xe0\x9a", "[0xe0][0x9a]"),
    (b"\xe0\x9b", "頭"),
    (b"\xe0\x9c", "闘"),
    (b"\xe0\x9d", "動"),
    (b"\xe0\x9e", "道"),
    (b"\xe0\x9f", "汝"),
    (b"\xe0\xa0", "日"),
    (b"\xe0\xa1", "入"),
    (b"\xe0\xa2", "任"),
    (b"\xe0\xa3", "年"),
    (b"\xe0\xa4", "敗"),
    (b"\xe0\xa5", "配"),
    (b"\xe0\xa6", "発"),
    (b"\xe0\xa7", "反"),
    (b"\xe0\xa8", "彼"),
    (b"\xe0\xa9", "匹"),
    (b"\xe0\xaa", "百"),
    (b"\xe0\xab", "負"),
    (b"\xe0\xac", "部"),
    (b"\xe0\xad", "物"),
    (b"\xe0\xae", "聞"),
    (b"\xe0\xaf", "別"),
    (b"\xe0\xb0", "変"),
    (b"\xe0\xb1", "報"),
    (b"\xe0\xb2", "放"),
    (b"\xe0\xb3", "方"),
    (b"\xe0\xb4", "本"),
    (b"\xe0\xb5", "魔"),
    (b"\xe0\xb6", "無"),
    (b"\xe0\xb7", "名"),
    (b"\xe0\xb8", "命"),
    (b"\xe0\xb9", "明"),
    (b"\xe0\xba", "目"),
    (b"\xe0\xbb", "厄"),
    (b"\xe0\xbc", "役"),
    (b"\xe0\xbd", "優"),
    (b"\xe0\xbe", "由"),
    (b"\xe0\xbf", "予"),
    (b"\xe0\xc0", "様"),
    (b"\xe0\xc1", "用"),
    (b"\xe0\xc2", "流"),
    (b"\xe0\xc3", "令"),
    (b"\xe0\xc4", "礼"),
    (b"\xe0\xc5", "連"),
    (b"\xe0\xc6", "録"),
    (b"\xe0\xc7", "話"),
    (b"\xe0\xc8", "具"),
    (b"\xe0\xc9", "必"),
    (b"\xe0\xca", "要"),
    (b"\xe0\xcb", "木"),
    (b"\xe0\xcc", "復"),
    (b"\xe0\xcd", "換"),
    (b"\xe0\xce", "交"),
    (b"\xe0\xcf", "順"),
    (b"\xe0\xd0", "星"),
    (b"\xe0\xd1", "堂"),
    (b"\xe0\xd2", "宝"),
    (b"\xe0\xd3", "[0xe0][0xd3]"),
    (b"\xe0\xd4", "特"),
    (b"\xe0\xd5", "新"),
    (b"\xe0\xd6", "下"),
    (b"\xe0\xd7", "室"),
    (b"\xe0\xd8", "各"),
    (b"\xe0\xd9", "法"),
    (b"\xe0\xda", "素"),
    (b"\xe0\xdb", "街"),
    (b"\xe0\xdc", "家"),
    (b"\xe0\xdd", "能"),
    (b"\xe0\xde", "競"),
    (b"\xe0\xdf", "白"),
    (b"\xe0\xe0", "統"),
    (b"\xe0\xe1", "主"),
    (b"\xe0\xe2", "父"),
    (b"\xe0\xe3", "親"),
    (b"\xe0\xe4", "色"),
    (b"\xe0\xe5", "諸"),
    (b"\xe0\xe6", "砲"),
    (b"\xe0\xe7", "珠"),
    (b"\xe0\xe8", "浄"),
    (b"\xe0\xe9", "球"),
    (b"\xe0\xea", "武"),
    (b"\xe0\xeb", "器"),
    (b"\xe0\xec", "屋"),
    (b"\xe0\xed", "々"),
    (b"\xe0\xee", "練"),
    (b"\xe0\xef", "女"),
    (b"\xe0\xf0", "閉"),
    (b"\xe0\xf1", "同"),
    (b"\xe0\xf2", "凶"),
    (b"\xe0\xf3", "南"),
    (b"\xe0\xf4", "北"),
    (b"\xe0\xf5", "黒"),
    (b"\xe0\xf6", "超"),
    (b"\xe0\xf7", "書"),
    (b"\xe0\xf8", "水"),
    (b"\xe0\xf9", "務"),
    (b"\xe0\xfa", "攻"),
    (b"\xe0\xfb", "賢"),
    (b"\xe0\xfc", "思"),
    (b"\xe0\xfd", "知"),
    (b"\xe0\xfe", "[0xe0][0xfe]"),
    (b"\xe0\xff", "同"),
    (b"\xfe", "\\n"),
];
