/// Hard-coded page copy
///
/// Everything the pages display apart from the photo catalog:
/// home page collections, the about page, contact details and FAQ,
/// plus the legal documents in `legal`.

pub mod legal;

pub const BRAND: &str = "PHOTOGRAPHY";
pub const TAGLINE: &str = "Capturing moments that tell stories and evoke emotions through the lens.";

/// A themed series on the home page. Selecting one opens the gallery
/// with `query` typed into the search box.
#[derive(Debug, Clone, Copy)]
pub struct Collection {
    pub title: &'static str,
    pub description: &'static str,
    pub cover: &'static str,
    pub query: &'static str,
}

pub const COLLECTIONS: [Collection; 4] = [
    Collection {
        title: "Nature",
        description: "Capturing the beauty of the natural world",
        cover: "nature-cover.jpg",
        query: "mountain",
    },
    Collection {
        title: "Urban",
        description: "City life through the lens",
        cover: "urban-cover.jpg",
        query: "urban",
    },
    Collection {
        title: "Portraits",
        description: "Intimate portraits that tell a story",
        cover: "portrait-cover.jpg",
        query: "portrait",
    },
    Collection {
        title: "Abstract",
        description: "Finding beauty in the abstract",
        cover: "abstract-cover.jpg",
        query: "abstract",
    },
];

pub const HERO_TITLE: &str = "IMMERSIVE PHOTOGRAPHY";
pub const HERO_SUBTITLE: &str = "Capturing moments that tell stories and evoke emotions";

pub const FEATURED_TITLE: &str = "Mountain Reflections";
pub const FEATURED_TEXT: &str = "The still waters of the mountain lake perfectly mirror the majesty of the peaks. \
     Captured at dawn to showcase the interplay of light and shadow.";

pub const CLOSING_TITLE: &str = "Ready to collaborate on your next project?";
pub const CLOSING_TEXT: &str = "Let's create something extraordinary together.";

pub const PHOTOGRAPHER: &str = "Alec Soth";
pub const ROLE: &str = "PORTRAIT & LANDSCAPE PHOTOGRAPHER";

pub const BIOGRAPHY: [&str; 3] = [
    "I am a dedicated photographer with a passion for capturing the extraordinary in everyday moments. \
     Based in New York City, my work focuses on landscape, portrait, and street photography. \
     Through my lens, I strive to reveal the hidden stories that surround us.",
    "My journey in photography began when I received my first camera as a teenager. Since then, \
     I've developed a style that combines dramatic lighting with minimalist composition.",
    "When I'm not photographing, I explore hiking trails, study art history, and teach photography workshops. \
     I believe that photography is not just about documenting what exists, but rather about revealing \
     what might otherwise remain unseen.",
];

/// (heading, body)
pub const APPROACH: [(&str, &str); 2] = [
    (
        "Light & Composition",
        "My photography is guided by the interplay of light and shadow, authentic human connection, \
         and finding beauty in simplicity.",
    ),
    (
        "Storytelling",
        "Each project begins with careful observation and patience, building rapport with subjects, \
         and studying the location's unique qualities.",
    ),
];

pub const EQUIPMENT: [&str; 7] = [
    "Sony Alpha a7 IV",
    "Fujifilm X-T4",
    "24-70mm f/2.8",
    "50mm f/1.4",
    "85mm f/1.8",
    "Profoto B10 lights, reflectors",
    "Adobe Lightroom, Capture One Pro",
];

/// (title, details)
pub const RECOGNITION: [(&str, &str); 4] = [
    ("Solo Exhibition: \"Perspectives\"", "Aperture Gallery, New York, 2023"),
    ("Finalist, International Photography Awards", "Portrait Category, 2022"),
    ("Featured in National Geographic", "Summer 2021 Issue"),
    ("Commercial work with Vogue", "Editorial Spread, May 2022"),
];

pub const SUCCESS_TITLE: &str = "Message Sent!";
pub const SUCCESS_TEXT: &str = "Thank you for reaching out. I'll get back to you soon.";

pub const CONTACT_INTRO: &str =
    "Interested in collaborating or have questions about my work? I'd love to hear from you.";
pub const CONTACT_EMAIL: &str = "info@photographyportfolio.com";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_ADDRESS: [&str; 2] = ["123 Photo Street", "New York, NY 10001"];

/// Social networks listed under "Connect With Me"
pub const SOCIAL_NETWORKS: [&str; 4] = ["Instagram", "Facebook", "Pinterest", "LinkedIn"];

/// (question, answer)
pub const FAQ: [(&str, &str); 4] = [
    (
        "What types of photography do you specialize in?",
        "I specialize in portrait, landscape, and architectural photography for both personal and \
         commercial projects. I also offer post-processing and retouching services.",
    ),
    (
        "How far in advance should I book?",
        "For commercial projects, 2-3 weeks notice is ideal. For personal sessions, I can sometimes \
         accommodate shorter timeframes depending on my schedule.",
    ),
    (
        "Do you travel for photo shoots?",
        "Yes, I'm available for travel both domestically and internationally. Travel expenses will be \
         included in your custom quote.",
    ),
    (
        "How will I receive my photos?",
        "All photos are delivered through a private online gallery where you can download \
         high-resolution images and share them with friends and family.",
    ),
];
