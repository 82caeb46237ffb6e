/// Every user-visible string of the page, for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringTable {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub single_title: &'static str,
    pub single_label: &'static str,
    pub single_btn: &'static str,
    pub batch_title: &'static str,
    pub batch_label: &'static str,
    pub batch_btn: &'static str,
    pub footer: &'static str,
    pub err_encoding: &'static str,
    pub err_empty: &'static str,
    pub err_too_large: &'static str,
    pub err_too_many_lines: &'static str,
    pub err_generation: &'static str,
    pub err_upload: &'static str,
    pub switch: &'static str,
}

pub static FR: StringTable = StringTable {
    title: "Générateur de QR Code",
    subtitle: "Outil interne - Unitaire & Batch",
    single_title: "Génération Unique",
    single_label: "Texte ou URL :",
    single_btn: "Télécharger le PNG",
    batch_title: "Import par fichier (Batch)",
    batch_label: "Fichier .txt ou .csv (un QR par ligne) :",
    batch_btn: "Générer le Pack ZIP",
    footer: "Point d'entrée API activé et sécurisé.",
    err_encoding: "Erreur d'encodage : le fichier doit être en UTF-8",
    err_empty: "Le fichier est vide.",
    err_too_large: "Le fichier est trop volumineux.",
    err_too_many_lines: "Le fichier contient trop de lignes.",
    err_generation: "Erreur lors de la génération du QR code.",
    err_upload: "Envoi du fichier invalide.",
    switch: "English",
};

pub static EN: StringTable = StringTable {
    title: "QR Code Generator",
    subtitle: "Internal tool - Single & Batch",
    single_title: "Single Generation",
    single_label: "Text or URL:",
    single_btn: "Download PNG",
    batch_title: "Batch Import",
    batch_label: "File .txt or .csv (one QR per line):",
    batch_btn: "Generate ZIP Pack",
    footer: "API endpoint active and secured.",
    err_encoding: "Encoding error: file must be UTF-8",
    err_empty: "File is empty.",
    err_too_large: "File is too large.",
    err_too_many_lines: "File has too many lines.",
    err_generation: "QR code generation failed.",
    err_upload: "Malformed upload.",
    switch: "Français",
};
