//! Event tags shown under a card.
//!
//! Order matters: a name carrying several markers gets the first one listed.

pub const TAG_MAPPINGS: &[(&str, &str)] = &[
    ("👘", "👘𝑲𝒊𝒎𝒐𝒏𝒐👘"),
    ("☃️", "☃️𝑾𝒊𝒏𝒕𝒆𝒓☃️"),
    ("🐰", "🐰𝑩𝒖𝒏𝒏𝒚🐰"),
    ("🎮", "🎮𝑮𝒂𝒎𝒆🎮"),
    ("🎄", "🎄𝑪𝒓𝒊𝒔𝒕𝒎𝒂𝒔🎄"),
    ("🎃", "🎃𝑯𝒆𝒍𝒍𝒐𝒘𝒆𝒆𝒏🎃"),
    ("🏖️", "🏖️𝑺𝒖𝒎𝒎𝒆𝒓🏖️"),
    ("🧹", "🧹𝑴𝒂𝒅𝒆🧹"),
    ("🥻", "🥻𝑺𝒂𝒓𝒆𝒆🥻"),
    ("☔", "☔𝑴𝒐𝒏𝒔𝒐𝒐𝒏☔"),
    ("🎒", "🎒𝑺𝒄𝒉𝒐𝒐𝒍🎒"),
    ("🎩", "🎩𝑻𝒖𝒙𝒆𝒅𝒐🎩"),
    ("👥", "👥𝐃𝐮𝐨👥"),
    ("🤝🏻", "🤝🏻𝐆𝐫𝐨𝐮𝐩🤝🏻"),
    ("👑", "👑𝑳𝒐𝒓𝒅👑"),
    ("🩺", "🩺𝑵𝒖𝒓𝒔𝒆🩺"),
    ("💍", "💍𝑾𝒆𝒅𝒅𝒊𝒏𝒈💍"),
    ("🎊", "🎊𝑪𝒉𝒆𝒆𝒓𝒍𝒆𝒂𝒅𝒆𝒓𝒔🎊"),
    ("⚽", "⚽𝑺𝒐𝒄𝒄𝒆𝒓⚽"),
    ("🏀", "🏀𝑩𝒂𝒔𝒌𝒆𝒕𝒃𝒂𝒍𝒍🏀 "),
    ("💐", "💐𝑮𝒓𝒐𝒐𝒎💐"),
    ("🥂", "🥂𝑷𝒂𝒓𝒕𝒚🥂"),
    ("💞", "💞𝑽𝒂𝒍𝒆𝒏𝒕𝒊𝒏𝒆💞"),
];

/// Label of the first marker contained in `name`.
pub fn tag_for(name: &str) -> Option<&'static str> {
    TAG_MAPPINGS
        .iter()
        .find(|(marker, _)| name.contains(marker))
        .map(|(_, label)| *label)
}
