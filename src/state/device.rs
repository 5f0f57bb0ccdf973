// Device classification, evaluated once at startup
use super::navigator::NavigatorInfo;

pub const MOBILE_MAX_WIDTH: f64 = 1460.0;

const MOBILE_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    pub fn classify(viewport_width: Option<f64>, user_agent: Option<&str>) -> Self {
        let narrow = viewport_width.is_some_and(|w| w <= MOBILE_MAX_WIDTH);
        let mobile_ua = user_agent.is_some_and(|ua| {
            let ua = ua.to_ascii_lowercase();
            MOBILE_MARKERS.iter().any(|m| ua.contains(m))
        });
        if narrow || mobile_ua {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn detect(info: &dyn NavigatorInfo) -> Self {
        Self::classify(info.viewport_width(), info.user_agent().as_deref())
    }

    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}
