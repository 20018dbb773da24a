//! Compiled-in content of the tribute page.
//!
//! Everything here is fixed at authoring time; the engine never mutates it.

use crate::content::model::{ColorTag, IconTag, Memory, Quote, QuoteKind, TimelineEvent, Wish};

/// Hero section headline.
pub const HERO_TITLE: &str = "Happy Birthday";
/// Hero section name line.
pub const HERO_NAME: &str = "Caroline Tanuwijaya \u{1F496}";
/// Hero section subtitle.
pub const HERO_SUBTITLE: &str = "Celebrating the most wonderful person in my life";

/// Love letter section heading.
pub const LETTER_HEADING: &str = "Surat Untuk Caroline";
/// The letter body shown once the envelope is opened.
pub const LETTER_MESSAGE: &str = "Terima kasih sudah menjadi bagian dari hidupku. Hari ini, aku ingin merayakan kehadiranmu yang luar biasa. Setiap momen bersamamu adalah hadiah terindah yang pernah aku terima. Senyummu selalu menerangi hariku, tawamu adalah musik favoritku, dan cintamu adalah kekuatan yang membuatku menjadi versi terbaik dari diriku. Di hari spesialmu ini, aku berharap kamu merasakan betapa berharganya dirimu bagiku. Selamat ulang tahun, sayangku. Semoga tahun ini membawa lebih banyak kebahagiaan, kesuksesan, dan petualangan untuk kita berdua. Aku mencintaimu dengan segenap hatiku. \u{2764}\u{FE0F}";

/// Gallery section heading.
pub const GALLERY_HEADING: &str = "Kenangan Indah Kita";
/// Gallery section intro line.
pub const GALLERY_INTRO: &str =
    "Setiap momen bersamamu adalah hadiah terindah yang bisa kuimpikan";

/// Timeline section heading.
pub const TIMELINE_HEADING: &str = "Perjalanan Cinta Kita";
/// Timeline section intro line.
pub const TIMELINE_INTRO: &str =
    "Setiap momen bersamamu membuat hidup ini semakin berarti dan penuh warna";

/// Gift section heading.
pub const GIFT_HEADING: &str = "Hadiah Spesial Untukmu";
/// Gift section intro line.
pub const GIFT_INTRO: &str =
    "Sebuah kado kecil yang kuharap dapat menghangatkan hatimu dan membawa senyuman di wajahmu";
/// Message revealed inside the opened gift box.
pub const GIFT_MESSAGE: &str =
    "Semoga kebahagiaanmu tak pernah pudar, seperti cintaku yang tak akan pernah padam.";

/// Quotes section heading.
pub const QUOTES_HEADING: &str = "Quotes Favorit Kita";

/// Wishes section heading.
pub const WISHES_HEADING: &str = "Ucapan Dari Teman-Teman";

/// Outro section heading.
pub const OUTRO_HEADING: &str = "Aku Mencintaimu, Caroline";
/// Outro farewell line.
pub const OUTRO_FAREWELL: &str = "Aku harap hari ini membuatmu tersenyum. Terima kasih telah menjadi bagian terindah dalam hidupku.";
/// Outro footer credit.
pub const OUTRO_CREDIT: &str = "for Caroline Tanuwijaya \u{2014} Happy Birthday 2025";

/// Relative path to the background music track.
pub const BACKGROUND_MUSIC: &str = "music/anugrah_terindah.mp3";

/// The nine gallery memories.
pub fn memories() -> Vec<Memory> {
    let raw: [(&str, &str, &str, &str, &str); 9] = [
        (
            "images/pertemuan.jpg",
            "Pertemuan pertama kita",
            "Januari 5, 2025",
            "Surabaya",
            "Kamu adalah bintang di langitku, yang selalu bersinar terang. Setiap detik bersamamu adalah kenangan yang tak terlupakan.",
        ),
        (
            "images/sawah.jpg",
            "Pergi ke Sawah",
            "Januari 31, 2025",
            "Lamongan",
            "Kamu adalah matahariku, yang selalu bersinar di setiap langkahku. Memorimu seperti hamparan sawah yang indah tak berujung.",
        ),
        (
            "images/ngedate.jpg",
            "Pertama kali nge-date",
            "Februari 4, 2025",
            "Tunjungan Plaza",
            "Kamu adalah bintang di langitku, yang selalu bersinar terang. Tiap tatapanmu membuatku jatuh cinta lagi dan lagi.",
        ),
        (
            "images/imnottrash.jpg",
            "Pertama kali im not trash",
            "Februari 11, 2025",
            "Galaxy Mall",
            "Kamu adalah pelangi dalam hidupku, yang selalu memberi warna pada hariku. Tawamu adalah melodi terindah yang pernah kudengar.",
        ),
        (
            "images/gereja.jpg",
            "Kita ke gereja bareng",
            "Februari 16, 2025",
            "Pakuwon City Mall",
            "Kamu adalah cahaya dalam hidupku, yang selalu menerangi jalanku. Bersyukur kepada Tuhan telah mempertemukan kita.",
        ),
        (
            "images/kodam.jpg",
            "Kita ke kodam setelah nonton",
            "Maret 2, 2025",
            "Pasar Malam Kodam Brawijaya",
            "Kamu adalah lagu dalam hidupku, yang selalu mengalun indah di telingaku. Bersamamu, setiap tempat terasa seperti surga.",
        ),
        (
            "images/danau.jpg",
            "Kita ke danau bareng",
            "Maret 13, 2025",
            "Universitas Airlangga",
            "Cintaku padamu sedalam danau, seluas langit, dan setinggi gunung. Setiap momen bersamamu adalah momen yang berharga.",
        ),
        (
            "images/masak.jpg",
            "Kita masak bareng",
            "Maret 16, 2025",
            "Surabaya",
            "Kamu adalah bumbu dalam hidupku, yang selalu memberi rasa pada setiap hariku. Bersamamu, hidupku terasa lebih berwarna.",
        ),
        (
            "images/nonton_2.jpg",
            "Kita nonton lagi",
            "Maret 18, 2025",
            "Surabaya",
            "Kamu adalah sahabat terbaikku, yang selalu ada di sampingku. Bersamamu, aku merasa lengkap.",
        ),
    ];

    raw.into_iter()
        .map(|(image, caption, date, location, note)| Memory {
            image: image.into(),
            caption: caption.into(),
            date: date.into(),
            location: location.into(),
            note: note.into(),
        })
        .collect()
}

/// The four timeline milestones.
pub fn timeline_events() -> Vec<TimelineEvent> {
    vec![
        TimelineEvent {
            date: "5 Januari 2025".into(),
            title: "Pertama Kali Bertemu".into(),
            description: "Awal pertemuan kita yang tak terlupakan. Hari dimana takdir mempertemukan kita.".into(),
            location: "Surabaya".into(),
            icon: IconTag::Star,
            color: ColorTag::Pink,
            image: "images/timeline_bertemu.jpg".into(),
        },
        TimelineEvent {
            date: "16 Januari 2025".into(),
            title: "Pertama Kali Chatting".into(),
            description: "Kita mulai saling mengenal lebih dekat. Obrolan yang tak ada habisnya.".into(),
            location: "Instagram".into(),
            icon: IconTag::Phone,
            color: ColorTag::Purple,
            image: "images/timeline_chatting.jpg".into(),
        },
        TimelineEvent {
            date: "4 Februari 2025".into(),
            title: "Pertama Kali Kencan".into(),
            description: "Hari pertama kita bertemu di Surabaya secara langsung. Momen yang penuh rasa gugup dan bahagia.".into(),
            location: "Tunjungan Plaza".into(),
            icon: IconTag::Heart,
            color: ColorTag::Pink,
            image: "images/timeline_kencan.jpg".into(),
        },
        TimelineEvent {
            date: "16 April 2025".into(),
            title: "Ulang Tahun Spesial".into(),
            description: "Merayakan hari spesialmu dengan penuh cinta. Hari yang penuh kebahagiaan dan kejutan.".into(),
            location: "Our Special Place".into(),
            icon: IconTag::Calendar,
            color: ColorTag::Purple,
            image: "images/timeline_ultah.jpg".into(),
        },
    ]
}

/// The four carousel quotes.
pub fn quotes() -> Vec<Quote> {
    vec![
        Quote {
            text: "Love is not about how many days, months, or years you have been together. Love is about how much you love each other every single day.".into(),
            author: "Our favorite quote".into(),
            kind: QuoteKind::Quote,
            color: ColorTag::Pink,
        },
        Quote {
            text: "And I'd choose you; in a hundred lifetimes, in a hundred worlds, in any version of reality, I'd find you and I'd choose you.".into(),
            author: "The Chaos of Stars".into(),
            kind: QuoteKind::Lyric,
            color: ColorTag::Purple,
        },
        Quote {
            text: "In all the world, there is no heart for me like yours. In all the world, there is no love for you like mine.".into(),
            author: "Maya Angelou".into(),
            kind: QuoteKind::Quote,
            color: ColorTag::Rose,
        },
        Quote {
            text: "I love you without knowing how, or when, or from where. I love you simply, without problems or pride.".into(),
            author: "Pablo Neruda".into(),
            kind: QuoteKind::Poem,
            color: ColorTag::Fuchsia,
        },
    ]
}

/// The five birthday wishes.
pub fn wishes() -> Vec<Wish> {
    vec![
        Wish {
            name: "Andi".into(),
            message: "Happy birthday Caroline! Semoga semua impianmu tercapai tahun ini!".into(),
            relation: "Teman Kuliah".into(),
        },
        Wish {
            name: "Budi".into(),
            message: "Selamat ulang tahun! Tetap jadi pribadi yang ceria dan menginspirasi ya!".into(),
            relation: "Teman Kantor".into(),
        },
        Wish {
            name: "Cindy".into(),
            message: "HBD Caroline! Kamu adalah teman terbaik yang pernah aku miliki. Semoga bahagia selalu!".into(),
            relation: "Sahabat".into(),
        },
        Wish {
            name: "David".into(),
            message: "Selamat bertambah usia! Semoga makin sukses dalam karir dan cintanya ya!".into(),
            relation: "Sepupu".into(),
        },
        Wish {
            name: "Ella".into(),
            message: "Happy birthday dear! Semoga tahun ini membawa lebih banyak kebahagiaan untukmu!".into(),
            relation: "Teman SMA".into(),
        },
    ]
}
