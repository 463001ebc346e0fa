// src/i18n.rs
//! Static UI string tables. No plural rules, no formatting: one string per key.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Hi,
    Es,
    Fr,
    Ja,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Hi,
        Language::Es,
        Language::Fr,
        Language::Ja,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Ja => "ja",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Name of the language in itself.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::Ja => "日本語",
        }
    }

    pub fn region(self) -> &'static str {
        match self {
            Language::En => "United States",
            Language::Hi => "India",
            Language::Es => "España",
            Language::Fr => "France",
            Language::Ja => "日本",
        }
    }

    /// Footer label, e.g. "English (US)".
    pub fn footer_label(self) -> String {
        match self {
            Language::En => "English (US)".to_string(),
            other => other.code().to_uppercase(),
        }
    }

    pub fn strings(self) -> &'static Translations {
        match self {
            Language::En => &EN,
            Language::Hi => &HI,
            Language::Es => &ES,
            Language::Fr => &FR,
            Language::Ja => &JA,
        }
    }
}

pub struct Translations {
    pub anywhere: &'static str,
    pub any_week: &'static str,
    pub add_guests: &'static str,
    pub your_home: &'static str,
    pub signup: &'static str,
    pub login: &'static str,
    pub help_center: &'static str,
    pub reviews: &'static str,
    pub share: &'static str,
    pub save: &'static str,
    pub saved: &'static str,
    pub show_photos: &'static str,
    pub hosted_by: &'static str,
    pub guests: &'static str,
    pub guest: &'static str,
    pub night: &'static str,
    pub check_in: &'static str,
    pub check_out: &'static str,
    pub reserve: &'static str,
    pub reserved: &'static str,
    pub cleaning_fee: &'static str,
    pub service_fee: &'static str,
    pub total: &'static str,
    pub search_where: &'static str,
    pub search_destinations: &'static str,
    pub search_who: &'static str,
    pub select_region: &'static str,
    pub adults: &'static str,
    pub ages_13: &'static str,
    pub children: &'static str,
    pub ages_2_12: &'static str,
    pub pets: &'static str,
    pub bringing_service_animal: &'static str,
    pub phone_placeholder: &'static str,
    pub continue_label: &'static str,
    pub welcome: &'static str,
    pub share_title: &'static str,
    pub copy_link: &'static str,
}

static EN: Translations = Translations {
    anywhere: "Anywhere",
    any_week: "Any week",
    add_guests: "Add guests",
    your_home: "StayEase your home",
    signup: "Sign up",
    login: "Log in",
    help_center: "Help Center",
    reviews: "reviews",
    share: "Share",
    save: "Save",
    saved: "Saved",
    show_photos: "Show all photos",
    hosted_by: "hosted by",
    guests: "guests",
    guest: "guest",
    night: "night",
    check_in: "Check-in",
    check_out: "Checkout",
    reserve: "Reserve",
    reserved: "Reserved!",
    cleaning_fee: "Cleaning fee",
    service_fee: "Service fee",
    total: "Total",
    search_where: "Where",
    search_destinations: "Search destinations",
    search_who: "Who",
    select_region: "Search by region",
    adults: "Adults",
    ages_13: "Ages 13 or above",
    children: "Children",
    ages_2_12: "Ages 2–12",
    pets: "Pets",
    bringing_service_animal: "Bringing a service animal?",
    phone_placeholder: "Phone number",
    continue_label: "Continue",
    welcome: "Welcome to StayEase",
    share_title: "Share this place",
    copy_link: "Copy Link",
};

static HI: Translations = Translations {
    anywhere: "कहीं भी",
    any_week: "कोई भी सप्ताह",
    add_guests: "मेहमान जोड़ें",
    your_home: "अपना घर किराए पर दें",
    signup: "साइन अप करें",
    login: "लॉग इन करें",
    help_center: "सहायता केंद्र",
    reviews: "समीक्षाएं",
    share: "साझा करें",
    save: "सहेजें",
    saved: "सहेजा गया",
    show_photos: "सभी फ़ोटो दिखाएं",
    hosted_by: "मेज़बान",
    guests: "मेहमान",
    guest: "मेहमान",
    night: "रात",
    check_in: "चेक-इन",
    check_out: "चेकआउट",
    reserve: "आरक्षित करें",
    reserved: "आरक्षित!",
    cleaning_fee: "सफ़ाई शुल्क",
    service_fee: "सेवा शुल्क",
    total: "कुल",
    search_where: "कहाँ",
    search_destinations: "गंतव्य खोजें",
    search_who: "कौन",
    select_region: "क्षेत्र से खोजें",
    adults: "वयस्क",
    ages_13: "13 वर्ष या उससे अधिक",
    children: "बच्चे",
    ages_2_12: "आयु 2–12",
    pets: "पालतू जानवर",
    bringing_service_animal: "सेवा पशु ला रहे हैं?",
    phone_placeholder: "फ़ोन नंबर",
    continue_label: "जारी रखें",
    welcome: "StayEase में आपका स्वागत है",
    share_title: "यह जगह साझा करें",
    copy_link: "लिंक कॉपी करें",
};

static ES: Translations = Translations {
    anywhere: "Cualquier lugar",
    any_week: "Cualquier semana",
    add_guests: "Añadir huéspedes",
    your_home: "Pon tu casa en StayEase",
    signup: "Regístrate",
    login: "Iniciar sesión",
    help_center: "Centro de ayuda",
    reviews: "reseñas",
    share: "Compartir",
    save: "Guardar",
    saved: "Guardado",
    show_photos: "Mostrar todas las fotos",
    hosted_by: "anfitrión:",
    guests: "huéspedes",
    guest: "huésped",
    night: "noche",
    check_in: "Llegada",
    check_out: "Salida",
    reserve: "Reservar",
    reserved: "¡Reservado!",
    cleaning_fee: "Tarifa de limpieza",
    service_fee: "Tarifa de servicio",
    total: "Total",
    search_where: "Dónde",
    search_destinations: "Buscar destinos",
    search_who: "Quién",
    select_region: "Buscar por región",
    adults: "Adultos",
    ages_13: "13 años o más",
    children: "Niños",
    ages_2_12: "De 2 a 12 años",
    pets: "Mascotas",
    bringing_service_animal: "¿Traes un animal de servicio?",
    phone_placeholder: "Número de teléfono",
    continue_label: "Continuar",
    welcome: "Te damos la bienvenida a StayEase",
    share_title: "Comparte este lugar",
    copy_link: "Copiar enlace",
};

static FR: Translations = Translations {
    anywhere: "N'importe où",
    any_week: "Une semaine",
    add_guests: "Ajouter des voyageurs",
    your_home: "Mettre mon logement sur StayEase",
    signup: "Inscription",
    login: "Connexion",
    help_center: "Centre d'aide",
    reviews: "commentaires",
    share: "Partager",
    save: "Enregistrer",
    saved: "Enregistré",
    show_photos: "Afficher toutes les photos",
    hosted_by: "proposé par",
    guests: "voyageurs",
    guest: "voyageur",
    night: "nuit",
    check_in: "Arrivée",
    check_out: "Départ",
    reserve: "Réserver",
    reserved: "Réservé !",
    cleaning_fee: "Frais de ménage",
    service_fee: "Frais de service",
    total: "Total",
    search_where: "Destination",
    search_destinations: "Rechercher une destination",
    search_who: "Voyageurs",
    select_region: "Rechercher par région",
    adults: "Adultes",
    ages_13: "13 ans et plus",
    children: "Enfants",
    ages_2_12: "De 2 à 12 ans",
    pets: "Animaux",
    bringing_service_animal: "Vous voyagez avec un animal d'assistance ?",
    phone_placeholder: "Numéro de téléphone",
    continue_label: "Continuer",
    welcome: "Bienvenue sur StayEase",
    share_title: "Partager ce logement",
    copy_link: "Copier le lien",
};

static JA: Translations = Translations {
    anywhere: "どこでも",
    any_week: "いつでも",
    add_guests: "ゲストを追加",
    your_home: "お部屋を掲載",
    signup: "新規登録",
    login: "ログイン",
    help_center: "ヘルプセンター",
    reviews: "件のレビュー",
    share: "シェア",
    save: "保存",
    saved: "保存済み",
    show_photos: "写真をすべて表示",
    hosted_by: "ホスト:",
    guests: "人",
    guest: "人",
    night: "泊",
    check_in: "チェックイン",
    check_out: "チェックアウト",
    reserve: "予約する",
    reserved: "予約しました！",
    cleaning_fee: "清掃料金",
    service_fee: "サービス料",
    total: "合計",
    search_where: "目的地",
    search_destinations: "目的地を検索",
    search_who: "ゲスト",
    select_region: "地域で検索",
    adults: "大人",
    ages_13: "13歳以上",
    children: "子ども",
    ages_2_12: "2〜12歳",
    pets: "ペット",
    bringing_service_animal: "介助動物を同伴しますか？",
    phone_placeholder: "電話番号",
    continue_label: "続行",
    welcome: "StayEaseへようこそ",
    share_title: "この宿泊先をシェア",
    copy_link: "リンクをコピー",
};
