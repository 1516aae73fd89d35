use crate::core::models::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    AppSubtitle,
    DropzoneTitle,
    DropzoneSubtitle,
    ChooseFile,
    TakePhoto,
    BrowseGallery,
    ClearPreview,
    Identifying,
    ErrorTitle,
    Dismiss,
    About,
    Confidence,
    Taxonomy,
    Family,
    Genus,
    Species,
    Watering,
    Sunlight,
    Soil,
    NoWateringInfo,
    NoSunlightInfo,
    NoSoilInfo,
    NoDescription,
    CameraTitle,
    CameraOpening,
    CameraCapturing,
    CameraCapture,
    CameraSwitch,
    CameraClose,
    CameraFront,
    CameraBack,
    GalleryTitle,
    GallerySubtitle,
    GalleryClose,
    DarkMode,
    LightMode,
}

impl TextKey {
    pub const ALL: [TextKey; 36] = [
        TextKey::AppSubtitle,
        TextKey::DropzoneTitle,
        TextKey::DropzoneSubtitle,
        TextKey::ChooseFile,
        TextKey::TakePhoto,
        TextKey::BrowseGallery,
        TextKey::ClearPreview,
        TextKey::Identifying,
        TextKey::ErrorTitle,
        TextKey::Dismiss,
        TextKey::About,
        TextKey::Confidence,
        TextKey::Taxonomy,
        TextKey::Family,
        TextKey::Genus,
        TextKey::Species,
        TextKey::Watering,
        TextKey::Sunlight,
        TextKey::Soil,
        TextKey::NoWateringInfo,
        TextKey::NoSunlightInfo,
        TextKey::NoSoilInfo,
        TextKey::NoDescription,
        TextKey::CameraTitle,
        TextKey::CameraOpening,
        TextKey::CameraCapturing,
        TextKey::CameraCapture,
        TextKey::CameraSwitch,
        TextKey::CameraClose,
        TextKey::CameraFront,
        TextKey::CameraBack,
        TextKey::GalleryTitle,
        TextKey::GallerySubtitle,
        TextKey::GalleryClose,
        TextKey::DarkMode,
        TextKey::LightMode,
    ];
}

pub fn translate(language: Language, key: TextKey) -> &'static str {
    match language {
        Language::English => english(key),
        Language::French => french(key),
        Language::Arabic => arabic(key),
    }
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::AppSubtitle => "Identify any plant from a photo",
        TextKey::DropzoneTitle => "Drop a plant photo here",
        TextKey::DropzoneSubtitle => "JPEG, PNG or WebP",
        TextKey::ChooseFile => "Choose a file",
        TextKey::TakePhoto => "Take a photo",
        TextKey::BrowseGallery => "Try a sample",
        TextKey::ClearPreview => "Clear",
        TextKey::Identifying => "Identifying your plant...",
        TextKey::ErrorTitle => "Something went wrong",
        TextKey::Dismiss => "Dismiss",
        TextKey::About => "About",
        TextKey::Confidence => "Confidence",
        TextKey::Taxonomy => "Taxonomy",
        TextKey::Family => "Family",
        TextKey::Genus => "Genus",
        TextKey::Species => "Species",
        TextKey::Watering => "Watering",
        TextKey::Sunlight => "Sunlight",
        TextKey::Soil => "Soil",
        TextKey::NoWateringInfo => "No watering information available",
        TextKey::NoSunlightInfo => "No sunlight information available",
        TextKey::NoSoilInfo => "No soil information available",
        TextKey::NoDescription => "No description available",
        TextKey::CameraTitle => "Camera",
        TextKey::CameraOpening => "Starting camera...",
        TextKey::CameraCapturing => "Capturing...",
        TextKey::CameraCapture => "Capture",
        TextKey::CameraSwitch => "Switch camera",
        TextKey::CameraClose => "Close",
        TextKey::CameraFront => "Front camera",
        TextKey::CameraBack => "Back camera",
        TextKey::GalleryTitle => "Sample plants",
        TextKey::GallerySubtitle => "Pick a sample photo to identify",
        TextKey::GalleryClose => "Close",
        TextKey::DarkMode => "Dark mode",
        TextKey::LightMode => "Light mode",
    }
}

fn french(key: TextKey) -> &'static str {
    match key {
        TextKey::AppSubtitle => "Identifiez n'importe quelle plante à partir d'une photo",
        TextKey::DropzoneTitle => "Déposez une photo de plante ici",
        TextKey::DropzoneSubtitle => "JPEG, PNG ou WebP",
        TextKey::ChooseFile => "Choisir un fichier",
        TextKey::TakePhoto => "Prendre une photo",
        TextKey::BrowseGallery => "Essayer un exemple",
        TextKey::ClearPreview => "Effacer",
        TextKey::Identifying => "Identification de votre plante...",
        TextKey::ErrorTitle => "Une erreur est survenue",
        TextKey::Dismiss => "Fermer",
        TextKey::About => "À propos",
        TextKey::Confidence => "Confiance",
        TextKey::Taxonomy => "Taxonomie",
        TextKey::Family => "Famille",
        TextKey::Genus => "Genre",
        TextKey::Species => "Espèce",
        TextKey::Watering => "Arrosage",
        TextKey::Sunlight => "Ensoleillement",
        TextKey::Soil => "Sol",
        TextKey::NoWateringInfo => "Aucune information sur l'arrosage",
        TextKey::NoSunlightInfo => "Aucune information sur l'ensoleillement",
        TextKey::NoSoilInfo => "Aucune information sur le sol",
        TextKey::NoDescription => "Aucune description disponible",
        TextKey::CameraTitle => "Caméra",
        TextKey::CameraOpening => "Démarrage de la caméra...",
        TextKey::CameraCapturing => "Capture en cours...",
        TextKey::CameraCapture => "Capturer",
        TextKey::CameraSwitch => "Changer de caméra",
        TextKey::CameraClose => "Fermer",
        TextKey::CameraFront => "Caméra avant",
        TextKey::CameraBack => "Caméra arrière",
        TextKey::GalleryTitle => "Plantes d'exemple",
        TextKey::GallerySubtitle => "Choisissez une photo à identifier",
        TextKey::GalleryClose => "Fermer",
        TextKey::DarkMode => "Mode sombre",
        TextKey::LightMode => "Mode clair",
    }
}

fn arabic(key: TextKey) -> &'static str {
    match key {
        TextKey::AppSubtitle => "تعرّف على أي نبات من صورة",
        TextKey::DropzoneTitle => "أسقط صورة النبات هنا",
        TextKey::DropzoneSubtitle => "JPEG أو PNG أو WebP",
        TextKey::ChooseFile => "اختر ملفًا",
        TextKey::TakePhoto => "التقط صورة",
        TextKey::BrowseGallery => "جرّب مثالًا",
        TextKey::ClearPreview => "مسح",
        TextKey::Identifying => "جارٍ التعرف على نباتك...",
        TextKey::ErrorTitle => "حدث خطأ ما",
        TextKey::Dismiss => "إغلاق",
        TextKey::About => "نبذة",
        TextKey::Confidence => "الثقة",
        TextKey::Taxonomy => "التصنيف",
        TextKey::Family => "الفصيلة",
        TextKey::Genus => "الجنس",
        TextKey::Species => "النوع",
        TextKey::Watering => "الري",
        TextKey::Sunlight => "ضوء الشمس",
        TextKey::Soil => "التربة",
        TextKey::NoWateringInfo => "لا توجد معلومات عن الري",
        TextKey::NoSunlightInfo => "لا توجد معلومات عن ضوء الشمس",
        TextKey::NoSoilInfo => "لا توجد معلومات عن التربة",
        TextKey::NoDescription => "لا يوجد وصف",
        TextKey::CameraTitle => "الكاميرا",
        TextKey::CameraOpening => "جارٍ تشغيل الكاميرا...",
        TextKey::CameraCapturing => "جارٍ الالتقاط...",
        TextKey::CameraCapture => "التقاط",
        TextKey::CameraSwitch => "تبديل الكاميرا",
        TextKey::CameraClose => "إغلاق",
        TextKey::CameraFront => "الكاميرا الأمامية",
        TextKey::CameraBack => "الكاميرا الخلفية",
        TextKey::GalleryTitle => "نباتات نموذجية",
        TextKey::GallerySubtitle => "اختر صورة للتعرف عليها",
        TextKey::GalleryClose => "إغلاق",
        TextKey::DarkMode => "الوضع الداكن",
        TextKey::LightMode => "الوضع الفاتح",
    }
}
