//! 病害アドバイザリ（静的データ）
//!
//! 診断ラベルごとの説明・影響・対策・推奨メッセージ。
//! 既知ラベルは `HealthLabel` の網羅的なmatchで定義するため、
//! ラベルを追加するとエントリを書くまでコンパイルが通らない。

use crate::types::HealthLabel;

/// 1ラベル分のアドバイザリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    pub description: &'static str,
    pub impact: &'static [&'static str],
    /// データセットによっては空
    pub manage: &'static [&'static str],
    pub note: &'static str,
    pub link: Option<&'static str>,
}

const HEALTHY: Advisory = Advisory {
    description: "Your plant is healthy! No signs of disease detected.",
    impact: &[
        "Your plant is in excellent condition with no signs of disease.",
        "Keep monitoring regularly to maintain plant health.",
    ],
    manage: &[
        "Maintain good agricultural practices to keep the plant healthy.",
        "Regularly inspect your plant for any signs of disease.",
    ],
    note: "Keep monitoring regularly and maintain good agricultural practices.",
    link: None,
};

const EARLY_BLIGHT: Advisory = Advisory {
    description: "Early Blight is caused by the fungus Alternaria solani. It typically thrives in warm and humid conditions.",
    impact: &[
        "Reduces plant's overall health and vigor.",
        "Can significantly affect crop yields if left unmanaged, although not as destructive as Late Blight.",
    ],
    manage: &[
        "Apply fungicides regularly to control the disease.",
        "Rotate crops with non-solanaceous plants like beans to reduce the risk of infection.",
    ],
    note: "To maintain plant health, try using XYZ Organic Fertilizer.",
    link: None,
};

const LATE_BLIGHT: Advisory = Advisory {
    description: "Your plant is showing signs of blight. This disease can severely affect yield.",
    impact: &[
        "Highly destructive and can wipe out the entire potato crop if not controlled.",
        "Affects both the leaves and the tubers, severely reducing yield and quality.",
    ],
    manage: &[
        "Use systemic fungicides for effective disease management.",
        "Plant Late Blight-resistant potato varieties to reduce its impact.",
    ],
    note: "Use ABC Fungicide to protect your crops from blight.",
    link: None,
};

const BACTERIA_SPOTS: Advisory = Advisory {
    description: "Bacterial spot is caused by Xanthomonas bacteria. It spreads quickly in warm, wet weather and through splashing water.",
    impact: &[
        "Dark, water-soaked lesions on leaves reduce the plant's ability to photosynthesize.",
        "Infected fruit develops scabby spots that lower marketable yield.",
    ],
    manage: &[],
    note: "Use certified disease-free seed and copper-based sprays to protect your crops.",
    link: None,
};

/// 未知ラベル用のフォールバック
pub const UNKNOWN: Advisory = Advisory {
    description: "Unknown disease detected.",
    impact: &[],
    manage: &[],
    note: "Consult an expert for proper care.",
    link: None,
};

impl HealthLabel {
    pub fn advisory(&self) -> &'static Advisory {
        match self {
            HealthLabel::Healthy => &HEALTHY,
            HealthLabel::EarlyBlight => &EARLY_BLIGHT,
            HealthLabel::LateBlight => &LATE_BLIGHT,
            HealthLabel::BacteriaSpots => &BACTERIA_SPOTS,
        }
    }
}

/// ラベル文字列からアドバイザリを引く（未知ならフォールバック）
pub fn advisory_for(label: &str) -> &'static Advisory {
    HealthLabel::from_label(label)
        .map(|l| l.advisory())
        .unwrap_or(&UNKNOWN)
}
