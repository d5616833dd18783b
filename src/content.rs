//! Static page copy. Section ids double as nav anchors.

pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home" },
    Section { id: "about", label: "About" },
    Section { id: "services", label: "Services" },
    Section { id: "gallery", label: "Gallery" },
    Section { id: "contact", label: "Contact" },
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Excavation",
        description: "Site preparation, trenching and foundation digs with our own machinery.",
    },
    Service {
        title: "Earthworks",
        description: "Grading, levelling and drainage for residential and commercial plots.",
    },
    Service {
        title: "Transport",
        description: "Delivery and removal of soil, gravel and construction material.",
    },
];

pub const ABOUT: &[&str] = &[
    "PERO-GE.EX is a family-run excavation company with over two decades of work behind it.",
    "We handle every job ourselves, from the first survey to the last load of gravel, so you deal with one team from start to finish.",
];
