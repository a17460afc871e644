//! Locale-keyed canned reply texts.

use serde::{Deserialize, Serialize};

use super::classify::ReplyCategory;

/// Languages the assistant can answer in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (the default).
    #[default]
    En,
    /// Turkish.
    Tr,
}

impl Locale {
    /// Resolves a BCP 47-ish language tag to a supported locale.
    ///
    /// Unrecognized tags fall back to [`Locale::En`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "tr" => Locale::Tr,
            "en" => Locale::En,
            _ => Locale::En,
        }
    }

    /// Returns the language tag for this locale.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Tr => "tr",
        }
    }
}

/// The welcome message every new chat session is seeded with.
pub fn welcome_text(locale: Locale) -> &'static str {
    match locale {
        Locale::En => {
            "Hello! I'm your AI Dream Interpreter. I'm here to help you understand the hidden meanings in your dreams. What would you like to explore today?"
        }
        Locale::Tr => {
            "Merhaba! Ben senin Yapay Zeka Rüya Yorumcun. Rüyalarındaki gizli anlamları anlamana yardımcı olmak için buradayım. Bugün neyi keşfetmek istersin?"
        }
    }
}

/// Looks up the canned reply for a locale and category.
pub fn response_text(locale: Locale, category: ReplyCategory) -> &'static str {
    match locale {
        Locale::En => match category {
            ReplyCategory::Flying => FLYING_EN,
            ReplyCategory::Water => WATER_EN,
            ReplyCategory::Chase => CHASE_EN,
            ReplyCategory::Animals => ANIMALS_EN,
            ReplyCategory::Generic => GENERIC_EN,
        },
        Locale::Tr => match category {
            ReplyCategory::Flying => FLYING_TR,
            ReplyCategory::Water => WATER_TR,
            ReplyCategory::Chase => CHASE_TR,
            ReplyCategory::Animals => ANIMALS_TR,
            ReplyCategory::Generic => GENERIC_TR,
        },
    }
}

const FLYING_EN: &str = "Flying dreams are fascinating! They often represent a desire for freedom, liberation from constraints, or gaining a new perspective on life. The feeling of soaring can indicate feelings of empowerment and the ability to rise above challenges.

In your case, the context and emotions in the dream are important. Were you flying effortlessly or struggling to stay airborne? This can reveal how confident you feel about overcoming obstacles in your waking life.

Would you like to share more details about your flying dream?";

const WATER_EN: &str = "Water in dreams is deeply symbolic and typically represents emotions, the unconscious mind, and spiritual cleansing. The state of the water often reflects your emotional state:

• Clear, calm water: Peace and emotional clarity
• Turbulent or murky water: Emotional turmoil or confusion
• Deep water: The unconscious mind or hidden emotions
• Flowing water: Life changes or emotional release

What kind of water appeared in your dream? This will help me provide a more specific interpretation.";

const CHASE_EN: &str = "Chase dreams are among the most common dream themes and usually indicate avoidance or anxiety about something in your waking life. You might be running from:

• A difficult decision you need to make
• Confronting emotions or memories
• Responsibilities or commitments
• Aspects of yourself you're not ready to face

The key question is: what or who was chasing you? This often represents what you're trying to avoid in real life.";

const ANIMALS_EN: &str = "Animals in dreams often represent our instincts, primal desires, or aspects of our personality. Different animals carry different meanings:

• Cats: Independence, mystery, feminine energy
• Dogs: Loyalty, friendship, unconditional love
• Birds: Freedom, spirituality, higher perspective
• Snakes: Transformation, healing, hidden knowledge

The animal's behavior in your dream is also significant. Was it friendly, aggressive, or neutral?";

const GENERIC_EN: &str = "That's a very interesting dream! Dreams are highly personal and their meanings can vary based on your life experiences, emotions, and current circumstances.

To provide you with the most accurate interpretation, I'd love to know more details:

• What emotions did you feel during the dream?
• Are there any recurring elements or symbols?
• What's happening in your life right now that might connect to this dream?
• Did anything in the dream remind you of real-life situations?

The more context you can provide, the deeper we can explore the meaning together.";

const FLYING_TR: &str = "Uçma rüyaları büyüleyici! Genellikle özgürlük arzusunu, kısıtlamalardan kurtulmayı veya yaşama yeni bir perspektif kazanmayı temsil ederler. Yükseklerde süzülme hissi, güçlenme duygularını ve zorlukların üstesinden gelme yeteneğini gösterebilir.

Senin durumunda, rüyadaki bağlam ve duygular önemli. Zahmetsizce mi uçuyordun yoksa havada kalmaya çalışıyor muydun? Bu, uyanık yaşamındaki engelleri aşma konusunda ne kadar kendine güvendiğini gösterebilir.

Uçma rüyanla ilgili daha fazla detay paylaşmak ister misin?";

const WATER_TR: &str = "Rüyalarda su derinlemesine semboliktir ve tipik olarak duyguları, bilinçdışını ve ruhsal temizlenmeyi temsil eder. Suyun durumu genellikle duygusal durumunu yansıtır:

• Berrak, sakin su: Huzur ve duygusal berraklık
• Çalkantılı veya bulanık su: Duygusal karmaşa veya kafa karışıklığı
• Derin su: Bilinçdışı veya gizli duygular
• Akan su: Yaşam değişiklikleri veya duygusal salınım

Rüyanda nasıl bir su belirdi? Bu, daha spesifik bir yorum yapmama yardımcı olacak.";

const CHASE_TR: &str = "Kovalama rüyaları en yaygın rüya temalarından biridir ve genellikle uyanık yaşamında bir şeyden kaçınma veya kaygı duyduğunu gösterir. Şunlardan kaçıyor olabilirsin:

• Vermeniz gereken zor bir karar
• Duygularla veya anılarla yüzleşmek
• Sorumluluklar veya taahhütler
• Henüz yüzleşmeye hazır olmadığın öz yönlerin

Temel soru şu: seni kim veya ne kovalıyordu? Bu genellikle gerçek yaşamda kaçınmaya çalıştığın şeyi temsil eder.";

const ANIMALS_TR: &str = "Rüyalarda hayvanlar genellikle içgüdülerimizi, ilkel arzularımızı veya kişiliğimizin yönlerini temsil eder. Farklı hayvanlar farklı anlamlar taşır:

• Kediler: Bağımsızlık, gizem, dişil enerji
• Köpekler: Sadakat, dostluk, koşulsuz sevgi
• Kuşlar: Özgürlük, maneviyat, yüksek perspektif
• Yılanlar: Dönüşüm, şifa, gizli bilgi

Rüyandaki hayvanın davranışı da önemli. Dostça, saldırgan mı yoksa nötr müydü?";

const GENERIC_TR: &str = "Bu çok ilginç bir rüya! Rüyalar oldukça kişiseldir ve anlamları yaşam deneyimlerine, duygularına ve mevcut koşullarına göre değişebilir.

Sana en doğru yorumu verebilmek için daha fazla detay bilmek istiyorum:

• Rüya sırasında hangi duyguları hissettin?
• Tekrarlayan öğeler veya semboller var mı?
• Şu anda yaşamında bu rüyayla bağlantılı olabilecek neler oluyor?
• Rüyada gerçek yaşam durumlarını hatırlatan bir şey var mıydı?

Ne kadar çok bağlam sağlarsan, anlamı o kadar derinlemesine keşfedebiliriz.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_known_locales() {
        assert_eq!(Locale::from_tag("en"), Locale::En);
        assert_eq!(Locale::from_tag("TR"), Locale::Tr);
    }

    #[test]
    fn test_from_tag_unknown_falls_back_to_english() {
        assert_eq!(Locale::from_tag("de"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn test_response_text_locale_split() {
        let en = response_text(Locale::En, ReplyCategory::Flying);
        let tr = response_text(Locale::Tr, ReplyCategory::Flying);
        assert!(en.starts_with("Flying dreams are fascinating!"));
        assert!(tr.starts_with("Uçma rüyaları büyüleyici!"));
        assert_ne!(en, tr);
    }

    #[test]
    fn test_welcome_text_round_trip() {
        assert!(welcome_text(Locale::En).contains("AI Dream Interpreter"));
        assert!(welcome_text(Locale::Tr).contains("Rüya Yorumcun"));
    }

    #[test]
    fn test_every_category_has_text() {
        for locale in [Locale::En, Locale::Tr] {
            for category in [
                ReplyCategory::Flying,
                ReplyCategory::Water,
                ReplyCategory::Chase,
                ReplyCategory::Animals,
                ReplyCategory::Generic,
            ] {
                assert!(!response_text(locale, category).is_empty());
            }
        }
    }
}
