//! Stock alias map and icon file list shipped with the server.

pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("application/coreldraw", "image"),
    ("application/epub+zip", "text"),
    ("application/font-sfnt", "image"),
    ("application/font-woff", "image"),
    ("application/gpx+xml", "location"),
    ("application/illustrator", "image"),
    ("application/javascript", "text/code"),
    ("application/json", "text/code"),
    ("application/msaccess", "file"),
    ("application/msexcel", "x-office/spreadsheet"),
    ("application/msonenote", "x-office/document"),
    ("application/mspowerpoint", "x-office/presentation"),
    ("application/msword", "x-office/document"),
    ("application/octet-stream", "file"),
    ("application/postscript", "image"),
    ("application/rss+xml", "application/xml"),
    ("application/vnd.android.package-archive", "package/x-generic"),
    ("application/vnd.lotus-wordpro", "x-office/document"),
    ("application/vnd.garmin.tcx+xml", "location"),
    ("application/vnd.google-earth.kml+xml", "location"),
    ("application/vnd.google-earth.kmz", "location"),
    ("application/vnd.ms-excel", "x-office/spreadsheet"),
    ("application/vnd.ms-excel.addin.macroEnabled.12", "x-office/spreadsheet"),
    ("application/vnd.ms-excel.sheet.binary.macroEnabled.12", "x-office/spreadsheet"),
    ("application/vnd.ms-excel.sheet.macroEnabled.12", "x-office/spreadsheet"),
    ("application/vnd.ms-excel.template.macroEnabled.12", "x-office/spreadsheet"),
    ("application/vnd.ms-fontobject", "image"),
    ("application/vnd.ms-powerpoint", "x-office/presentation"),
    ("application/vnd.ms-powerpoint.addin.macroEnabled.12", "x-office/presentation"),
    ("application/vnd.ms-powerpoint.presentation.macroEnabled.12", "x-office/presentation"),
    ("application/vnd.ms-powerpoint.slideshow.macroEnabled.12", "x-office/presentation"),
    ("application/vnd.ms-powerpoint.template.macroEnabled.12", "x-office/presentation"),
    ("application/vnd.ms-visio.drawing.macroEnabled.12", "application/vnd.visio"),
    ("application/vnd.ms-visio.drawing", "application/vnd.visio"),
    ("application/vnd.ms-visio.stencil.macroEnabled.12", "application/vnd.visio"),
    ("application/vnd.ms-visio.stencil", "application/vnd.visio"),
    ("application/vnd.ms-visio.template.macroEnabled.12", "application/vnd.visio"),
    ("application/vnd.ms-visio.template", "application/vnd.visio"),
    ("application/vnd.ms-word.document.macroEnabled.12", "x-office/document"),
    ("application/vnd.ms-word.template.macroEnabled.12", "x-office/document"),
    ("application/vnd.oasis.opendocument.presentation", "x-office/presentation"),
    ("application/vnd.oasis.opendocument.presentation-template", "x-office/presentation"),
    ("application/vnd.oasis.opendocument.spreadsheet", "x-office/spreadsheet"),
    ("application/vnd.oasis.opendocument.spreadsheet-template", "x-office/spreadsheet"),
    ("application/vnd.oasis.opendocument.text", "x-office/document"),
    ("application/vnd.oasis.opendocument.text-master", "x-office/document"),
    ("application/vnd.oasis.opendocument.text-template", "x-office/document"),
    ("application/vnd.oasis.opendocument.text-web", "x-office/document"),
    ("application/vnd.openxmlformats-officedocument.presentationml.presentation", "x-office/presentation"),
    ("application/vnd.openxmlformats-officedocument.presentationml.slideshow", "x-office/presentation"),
    ("application/vnd.openxmlformats-officedocument.presentationml.template", "x-office/presentation"),
    ("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet", "x-office/spreadsheet"),
    ("application/vnd.openxmlformats-officedocument.spreadsheetml.template", "x-office/spreadsheet"),
    ("application/vnd.openxmlformats-officedocument.wordprocessingml.document", "x-office/document"),
    ("application/vnd.openxmlformats-officedocument.wordprocessingml.template", "x-office/document"),
    ("application/vnd.visio", "x-office/document"),
    ("application/vnd.wordperfect", "x-office/document"),
    ("application/x-7z-compressed", "package/x-generic"),
    ("application/x-bzip2", "package/x-generic"),
    ("application/x-cbr", "text"),
    ("application/x-compressed", "package/x-generic"),
    ("application/x-dcraw", "image"),
    ("application/x-deb", "package/x-generic"),
    ("application/x-fictionbook+xml", "text"),
    ("application/x-font", "image"),
    ("application/x-gimp", "image"),
    ("application/x-gzip", "package/x-generic"),
    ("application/x-iwork-keynote-sffkey", "x-office/presentation"),
    ("application/x-iwork-numbers-sffnumbers", "x-office/spreadsheet"),
    ("application/x-iwork-pages-sffpages", "x-office/document"),
    ("application/x-mobipocket-ebook", "text"),
    ("application/x-perl", "text/code"),
    ("application/x-photoshop", "image"),
    ("application/x-php", "text/code"),
    ("application/x-rar-compressed", "package/x-generic"),
    ("application/x-tar", "package/x-generic"),
    ("application/x-tex", "text"),
    ("application/xml", "text/html"),
    ("application/yaml", "text/code"),
    ("application/zip", "package/x-generic"),
    ("database", "file"),
    ("httpd/unix-directory", "dir"),
    ("text/css", "text/code"),
    ("text/csv", "x-office/spreadsheet"),
    ("text/html", "text/code"),
    ("text/x-c", "text/code"),
    ("text/x-c++src", "text/code"),
    ("text/x-h", "text/code"),
    ("text/x-java-source", "text/code"),
    ("text/x-ldif", "text/code"),
    ("text/x-python", "text/code"),
    ("text/x-shellscript", "text/code"),
    ("web", "text/code"),
    ("application/internet-shortcut", "link"),
    ("application/km", "mindmap"),
    ("application/x-freemind", "mindmap"),
    ("application/vnd.xmind.workbook", "mindmap"),
];

pub(crate) const FILES: &[&str] = &[
    "application",
    "application-pdf",
    "audio",
    "file",
    "folder",
    "folder-drag-accept",
    "folder-encrypted",
    "folder-external",
    "folder-public",
    "folder-shared",
    "folder-starred",
    "image",
    "link",
    "location",
    "mindmap",
    "package-x-generic",
    "text",
    "text-calendar",
    "text-code",
    "text-vcard",
    "video",
    "x-office-document",
    "x-office-presentation",
    "x-office-spreadsheet",
];
