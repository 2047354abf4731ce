//! Static content model for the invitation.
//!
//! Everything the page displays - names, quotes, venues, the photo wall,
//! bank accounts - lives here as plain data. The model is constructed once
//! at startup (builtin data or a JSON file) and never mutated; components
//! read it by reference and own no copy of it.
//!
//! Content is trusted configuration: there is no runtime validation beyond
//! JSON well-formedness.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SiteResult;

/// Base URL of the external QR image service for bank transfers.
const QR_SERVICE_BASE: &str = "https://img.vietqr.io/image";

/// Which half of the couple a venue, portrait, or bank account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Groom,
    Bride,
}

/// One member of the couple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Short name shown in the hero and footer
    pub display_name: String,
    /// Full name
    pub full_name: String,
    /// Portrait image reference
    pub image: String,
    /// Quote shown under the portrait
    pub quote: String,
}

/// A wedding party venue with its schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub title: String,
    pub subtitle: String,
    pub address: String,
    /// Display time, e.g. "14:30"
    pub time: String,
    /// Display date, e.g. "28/12/2025"
    pub date: String,
    /// External map link, opened in a new browsing context
    pub map_url: String,
}

/// One photo on the memory wall. Order in the gallery list is display and
/// lightbox navigation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub src: String,
    /// Optional date label
    #[serde(default)]
    pub date: Option<String>,
}

/// Bank account shown in the gift panel. Used only for display, clipboard
/// copy, and building the QR image URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Bank display name
    pub bank: String,
    pub account_number: String,
    /// Account holder name as registered with the bank
    pub account_name: String,
    /// Short bank code used by the QR image service, e.g. "SCB"
    pub code: String,
}

impl BankAccount {
    /// URL of the externally rendered transfer QR for this account.
    ///
    /// The image service is keyed by bank code and account number; this
    /// crate's only role is constructing the request URL.
    pub fn qr_image_url(&self) -> String {
        format!(
            "{}/{}-{}-compact.png",
            QR_SERVICE_BASE, self.code, self.account_number
        )
    }
}

/// A pair of values, one per side of the couple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerSide<T> {
    pub groom: T,
    pub bride: T,
}

impl<T> PerSide<T> {
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Groom => &self.groom,
            Side::Bride => &self.bride,
        }
    }
}

/// The full immutable content record the page is rendered from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeddingContent {
    pub groom: Person,
    pub bride: Person,
    /// Hero banner image
    pub hero_image: String,
    /// Background music source for the audio element
    pub music_src: String,
    pub venues: PerSide<Venue>,
    /// Ordered photo wall; insertion order defines lightbox prev/next
    pub gallery: Vec<Photo>,
    pub gifts: PerSide<BankAccount>,
}

impl WeddingContent {
    /// Load content from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> SiteResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let content = serde_json::from_str(&raw)?;
        Ok(content)
    }

    pub fn person(&self, side: Side) -> &Person {
        match side {
            Side::Groom => &self.groom,
            Side::Bride => &self.bride,
        }
    }

    /// Built-in content for Đạt & Thư's wedding.
    pub fn builtin() -> Self {
        Self {
            groom: Person {
                display_name: "Đạt".to_string(),
                full_name: "Tiến Đạt".to_string(),
                image: "https://res.cloudinary.com/dqxtjesjz/image/upload/v1765386979/groom_g5ygub.jpg".to_string(),
                quote: "Tình yêu không phải là nhìn nhau, mà là cùng nhìn về một hướng.".to_string(),
            },
            bride: Person {
                display_name: "Thư".to_string(),
                full_name: "Nguyễn Thư".to_string(),
                image: "https://res.cloudinary.com/dqxtjesjz/image/upload/v1765386979/bride_fxz48s.jpg".to_string(),
                quote: "Yêu là biết trân trọng từng khoảnh khắc bên nhau.".to_string(),
            },
            hero_image: "https://res.cloudinary.com/dqxtjesjz/image/upload/v1765386979/hero_gtgfrp.jpg".to_string(),
            music_src: "assets/music.mp3".to_string(),
            venues: PerSide {
                groom: Venue {
                    title: "Tiệc Cưới Nhà Trai".to_string(),
                    subtitle: "Tại Gia Đình Nhà Trai".to_string(),
                    address: "Số 16 lô 3, Phố Trung Nghĩa-KĐT Việt Hoà, Phường Việt Hoà, Thành phố Hải Phòng".to_string(),
                    time: "14:30".to_string(),
                    date: "28/12/2025".to_string(),
                    map_url: "https://maps.app.goo.gl/ZpPwKGahU8U4xB338".to_string(),
                },
                bride: Venue {
                    title: "Tiệc Cưới Nhà Gái".to_string(),
                    subtitle: "Tại Gia Đình Nhà Gái".to_string(),
                    address: "Thôn Phượng Hoàng- xã Cẩm Giang- Thành phố Hải Phòng".to_string(),
                    time: "8:00".to_string(),
                    date: "28/12/2025".to_string(),
                    map_url: "https://maps.app.goo.gl/GBjVxVin4P3CD4K2A".to_string(),
                },
            },
            gallery: vec![
                Photo { src: "assets/album_030523.jpg".to_string(), date: Some("03/05/2023".to_string()) },
                Photo { src: "assets/220923.jpg".to_string(), date: Some("22/09/2023".to_string()) },
                Photo { src: "assets/071223.jpg".to_string(), date: Some("07/12/2023".to_string()) },
                Photo { src: "assets/album_090224.jpg".to_string(), date: Some("09/02/2024".to_string()) },
                Photo { src: "assets/080324.jpg".to_string(), date: Some("08/03/2024".to_string()) },
                Photo { src: "assets/190524.jpg".to_string(), date: Some("19/05/2024".to_string()) },
                Photo { src: "assets/290724.jpg".to_string(), date: Some("29/07/2024".to_string()) },
                Photo { src: "assets/280125.jpg".to_string(), date: Some("28/01/2025".to_string()) },
                Photo { src: "assets/1401525.jpg".to_string(), date: Some("14/05/2025".to_string()) },
                Photo { src: "assets/280925.jpg".to_string(), date: Some("28/09/2025".to_string()) },
                Photo { src: "assets/281225.jpg".to_string(), date: Some("28/12/2025".to_string()) },
            ],
            gifts: PerSide {
                groom: BankAccount {
                    bank: "Ngân hàng TMCP Sài Gòn".to_string(),
                    account_number: "030081131429".to_string(),
                    account_name: "BUI TIEN DAT".to_string(),
                    code: "SCB".to_string(),
                },
                bride: BankAccount {
                    bank: "Ngân hàng TMCP Quân đội".to_string(),
                    account_number: "24960368808000".to_string(),
                    account_name: "NGUYEN THI THU".to_string(),
                    code: "MB".to_string(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_shape() {
        let content = WeddingContent::builtin();
        assert_eq!(content.gallery.len(), 11);
        assert_eq!(content.groom.display_name, "Đạt");
        assert_eq!(content.bride.display_name, "Thư");
        assert_eq!(content.venues.get(Side::Groom).time, "14:30");
        assert_eq!(content.venues.get(Side::Bride).time, "8:00");
    }

    #[test]
    fn test_qr_image_url() {
        let account = WeddingContent::builtin().gifts.groom;
        assert_eq!(
            account.qr_image_url(),
            "https://img.vietqr.io/image/SCB-030081131429-compact.png"
        );
    }

    #[test]
    fn test_content_json_round_trip() {
        let content = WeddingContent::builtin();
        let json = serde_json::to_string(&content).unwrap();
        let parsed: WeddingContent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, content);
    }

    #[test]
    fn test_photo_date_is_optional() {
        let photo: Photo = serde_json::from_str(r#"{"src": "assets/solo.jpg"}"#).unwrap();
        assert!(photo.date.is_none());
    }
}
