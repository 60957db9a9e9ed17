/// Legal documents: privacy policy, terms of service, cookies policy
///
/// Each document is a title plus a list of sections. The "Last updated"
/// line always shows the current date.

use chrono::{Local, NaiveDate};

#[derive(Debug, Clone, Copy)]
pub enum Block {
    Paragraph(&'static str),
    Subheading(&'static str),
    Bullets(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

#[derive(Debug, Clone, Copy)]
pub struct LegalDocument {
    pub title: &'static str,
    pub sections: &'static [Section],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegalKind {
    Privacy,
    Terms,
    Cookies,
}

impl LegalKind {
    pub fn document(self) -> &'static LegalDocument {
        match self {
            LegalKind::Privacy => &PRIVACY_POLICY,
            LegalKind::Terms => &TERMS_OF_SERVICE,
            LegalKind::Cookies => &COOKIES_POLICY,
        }
    }
}

/// "Last updated: October 18, 2026"
pub fn last_updated_label(date: NaiveDate) -> String {
    format!("Last updated: {}", date.format("%B %-d, %Y"))
}

pub fn last_updated_today() -> String {
    last_updated_label(Local::now().date_naive())
}

const CONTACT_PRIVACY: &[&str] = &[
    "Lens Photography",
    "Email: privacy@lensphotography.com",
    "Phone: (555) 123-4567",
];

const CONTACT_LEGAL: &[&str] = &[
    "Lens Photography",
    "Email: legal@lensphotography.com",
    "Phone: (555) 123-4567",
];

pub static PRIVACY_POLICY: LegalDocument = LegalDocument {
    title: "Privacy Policy",
    sections: &[
        Section {
            heading: "Introduction",
            blocks: &[Block::Paragraph(
                "Lens Photography (\"we\", \"our\", or \"us\") respects your privacy and is committed to protecting your personal data. This privacy policy explains how we collect, use, process, and share your information when you use our website, services, or interact with us.",
            )],
        },
        Section {
            heading: "Information We Collect",
            blocks: &[
                Block::Paragraph("We may collect personal information that you provide directly to us, including:"),
                Block::Bullets(&[
                    "Contact information (name, email address, phone number)",
                    "Communication preferences and inquiries",
                    "Information provided when you contact us",
                    "Subscription details for our newsletter",
                    "Photography services booking information",
                ]),
                Block::Paragraph(
                    "We may also automatically collect certain information about your device and how you interact with our website, including:",
                ),
                Block::Bullets(&[
                    "IP address and browser information",
                    "Device type and operating system",
                    "Pages viewed and time spent on our website",
                    "Referral source and navigation paths",
                    "Cookies and similar tracking technologies",
                ]),
            ],
        },
        Section {
            heading: "How We Use Your Information",
            blocks: &[
                Block::Paragraph("We use the information we collect for various purposes, including:"),
                Block::Bullets(&[
                    "Providing, operating, and maintaining our website and services",
                    "Communicating with you regarding inquiries and bookings",
                    "Sending you our newsletter (if you've subscribed)",
                    "Improving our website and services",
                    "Analyzing usage patterns and trends",
                    "Protecting against fraudulent or unauthorized transactions",
                    "Complying with legal obligations",
                ]),
            ],
        },
        Section {
            heading: "Sharing Your Information",
            blocks: &[
                Block::Paragraph("We may share your information with third parties in the following circumstances:"),
                Block::Bullets(&[
                    "With service providers who perform services on our behalf (such as email delivery, hosting, payment processing)",
                    "To comply with legal obligations or valid legal processes",
                    "To protect our rights, privacy, safety, or property",
                    "In connection with a business transfer or transaction",
                    "With your consent or at your direction",
                ]),
                Block::Paragraph("We do not sell your personal information to third parties."),
            ],
        },
        Section {
            heading: "Your Rights and Choices",
            blocks: &[
                Block::Paragraph(
                    "Depending on your location, you may have rights regarding your personal information, including:",
                ),
                Block::Bullets(&[
                    "Accessing, correcting, or deleting your personal information",
                    "Withdrawing consent where processing is based on consent",
                    "Restricting or objecting to certain processing",
                    "Data portability rights",
                    "Lodging a complaint with a supervisory authority",
                ]),
                Block::Paragraph(
                    "To exercise these rights, please contact us using the information provided in the \"Contact Us\" section below.",
                ),
            ],
        },
        Section {
            heading: "Data Security",
            blocks: &[Block::Paragraph(
                "We implement appropriate technical and organizational measures to protect your personal information from unauthorized access, disclosure, alteration, or destruction. However, no method of transmission over the Internet or electronic storage is completely secure, so we cannot guarantee absolute security.",
            )],
        },
        Section {
            heading: "International Transfers",
            blocks: &[Block::Paragraph(
                "Your information may be transferred to, and processed in, countries other than the country in which you reside. These countries may have data protection laws that are different from the laws of your country. We take steps to ensure adequate safeguards are in place to protect your information when it is transferred internationally.",
            )],
        },
        Section {
            heading: "Changes to This Privacy Policy",
            blocks: &[Block::Paragraph(
                "We may update this privacy policy from time to time to reflect changes in our practices or for other operational, legal, or regulatory reasons. We will notify you of any material changes by posting the updated policy on our website and updating the \"Last updated\" date.",
            )],
        },
        Section {
            heading: "Contact Us",
            blocks: &[
                Block::Paragraph(
                    "If you have any questions, concerns, or requests regarding this privacy policy or our privacy practices, please contact us at:",
                ),
                Block::Bullets(CONTACT_PRIVACY),
            ],
        },
    ],
};

pub static TERMS_OF_SERVICE: LegalDocument = LegalDocument {
    title: "Terms of Service",
    sections: &[
        Section {
            heading: "Introduction",
            blocks: &[Block::Paragraph(
                "Welcome to Lens Photography. These Terms of Service (\"Terms\") govern your access to and use of our website, products, and services. By accessing or using our website, you agree to be bound by these Terms. If you do not agree to these Terms, please do not use our website or services.",
            )],
        },
        Section {
            heading: "Definitions",
            blocks: &[Block::Bullets(&[
                "\"Website\" refers to Lens Photography's website, accessible at www.lensphotography.com",
                "\"Services\" refers to the photography services offered by Lens Photography",
                "\"Content\" refers to all material displayed, published, or made available on our website",
                "\"User\", \"You\", and \"Your\" refers to the person accessing or using our website and services",
                "\"We\", \"Us\", and \"Our\" refers to Lens Photography",
            ])],
        },
        Section {
            heading: "Account Registration",
            blocks: &[Block::Paragraph(
                "To access certain features of our website or services, you may be required to create an account. When you create an account, you agree to provide accurate, current, and complete information. You are responsible for maintaining the confidentiality of your account credentials and for all activities that occur under your account. You agree to notify us immediately of any unauthorized use of your account.",
            )],
        },
        Section {
            heading: "Photography Services",
            blocks: &[
                Block::Paragraph(
                    "Photography services are subject to separate service agreements that will be provided prior to booking. By booking our services, you agree to the terms specified in those agreements, which may include:",
                ),
                Block::Bullets(&[
                    "Booking procedures and payment terms",
                    "Rescheduling and cancellation policies",
                    "Image delivery timeframes",
                    "Copyright and usage rights",
                    "Privacy considerations for subjects",
                ]),
            ],
        },
        Section {
            heading: "Intellectual Property Rights",
            blocks: &[
                Block::Paragraph(
                    "All content on our website, including but not limited to photographs, images, text, graphics, logos, icons, and software, is the property of Lens Photography or its content suppliers and is protected by copyright, trademark, and other intellectual property laws.",
                ),
                Block::Paragraph(
                    "You may not reproduce, distribute, modify, create derivative works from, publicly display, publicly perform, republish, download, store, or transmit any of the material on our website without our written consent.",
                ),
                Block::Paragraph(
                    "Photographs and images displayed in our portfolio are for viewing purposes only and may not be used, reproduced, or distributed without our explicit permission.",
                ),
            ],
        },
        Section {
            heading: "User Content",
            blocks: &[
                Block::Paragraph(
                    "If you submit, upload, or share any content on our website (such as comments or reviews), you grant us a non-exclusive, royalty-free, perpetual, irrevocable, and fully sublicensable right to use, reproduce, modify, adapt, publish, translate, create derivative works from, distribute, and display such content throughout the world in any media.",
                ),
                Block::Paragraph(
                    "You represent and warrant that you own or control all rights to the content you post, that the content is accurate, and that use of the content does not violate these Terms or any applicable laws.",
                ),
            ],
        },
        Section {
            heading: "Prohibited Uses",
            blocks: &[
                Block::Paragraph("You agree not to use our website or services:"),
                Block::Bullets(&[
                    "In any way that violates any applicable federal, state, local, or international law or regulation",
                    "To impersonate any person or entity, or falsely state or otherwise misrepresent your affiliation with a person or entity",
                    "To engage in any conduct that restricts or inhibits anyone's use or enjoyment of the website",
                    "To attempt to gain unauthorized access to our systems or networks",
                    "To use any automated means to access the website or collect any information from the website",
                    "To transmit any viruses, malware, or other harmful code",
                ]),
            ],
        },
        Section {
            heading: "Third-Party Links",
            blocks: &[Block::Paragraph(
                "Our website may contain links to third-party websites or services that are not owned or controlled by Lens Photography. We have no control over, and assume no responsibility for, the content, privacy policies, or practices of any third-party websites or services.",
            )],
        },
        Section {
            heading: "Disclaimer of Warranties",
            blocks: &[
                Block::Paragraph(
                    "Our website and services are provided on an \"as is\" and \"as available\" basis, without any warranties of any kind, either express or implied. We disclaim all warranties, express or implied, including but not limited to implied warranties of merchantability, fitness for a particular purpose, and non-infringement.",
                ),
                Block::Paragraph(
                    "We do not warrant that our website will be uninterrupted or error-free, that defects will be corrected, or that our website or the server that makes it available are free of viruses or other harmful components.",
                ),
            ],
        },
        Section {
            heading: "Limitation of Liability",
            blocks: &[Block::Paragraph(
                "To the maximum extent permitted by law, in no event shall Lens Photography, its directors, employees, partners, agents, suppliers, or affiliates be liable for any indirect, incidental, special, consequential, or punitive damages, including without limitation, loss of profits, data, use, goodwill, or other intangible losses, resulting from your access to or use of or inability to access or use the website or services.",
            )],
        },
        Section {
            heading: "Indemnification",
            blocks: &[Block::Paragraph(
                "You agree to defend, indemnify, and hold harmless Lens Photography, its directors, employees, partners, agents, suppliers, and affiliates from and against any claims, liabilities, damages, judgments, awards, losses, costs, expenses, or fees (including reasonable attorneys' fees) arising out of or relating to your violation of these Terms or your use of the website or services.",
            )],
        },
        Section {
            heading: "Governing Law",
            blocks: &[Block::Paragraph(
                "These Terms shall be governed by and construed in accordance with the laws of the State of New York, without regard to its conflict of law provisions. Any legal action or proceeding arising out of or relating to these Terms shall be brought exclusively in the courts of New York County, and you consent to the personal jurisdiction of such courts.",
            )],
        },
        Section {
            heading: "Changes to Terms of Service",
            blocks: &[Block::Paragraph(
                "We reserve the right, at our sole discretion, to modify or replace these Terms at any time. We will provide notice of any significant changes by posting the new Terms on our website and updating the \"Last updated\" date. Your continued use of our website or services after such changes constitutes your acceptance of the new Terms.",
            )],
        },
        Section {
            heading: "Contact Us",
            blocks: &[
                Block::Paragraph("If you have any questions about these Terms of Service, please contact us at:"),
                Block::Bullets(CONTACT_LEGAL),
            ],
        },
    ],
};

pub static COOKIES_POLICY: LegalDocument = LegalDocument {
    title: "Cookies Policy",
    sections: &[
        Section {
            heading: "Introduction",
            blocks: &[Block::Paragraph(
                "This Cookies Policy explains what cookies are and how Lens Photography (\"we\", \"our\", or \"us\") uses them on our website. We encourage you to read this policy to understand what cookies are, how we use them, the types of cookies we use, and how you can control or manage your cookie preferences.",
            )],
        },
        Section {
            heading: "What Are Cookies?",
            blocks: &[
                Block::Paragraph(
                    "Cookies are small text files that are stored on your computer or mobile device when you visit a website. They are widely used to make websites work more efficiently and provide information to the website owners.",
                ),
                Block::Paragraph(
                    "Cookies are not harmful and do not contain viruses or personal information that could identify you personally without your knowledge or consent. They simply hold small amounts of data specific to our website and your interactions with it.",
                ),
            ],
        },
        Section {
            heading: "How We Use Cookies",
            blocks: &[
                Block::Paragraph("We use cookies for several reasons, including:"),
                Block::Bullets(&[
                    "To ensure our website functions properly",
                    "To improve your browsing experience",
                    "To save your preferences for future visits",
                    "To analyze how our website is used so we can continually improve it",
                    "To personalize your experience",
                    "To enable certain features and functionality",
                ]),
            ],
        },
        Section {
            heading: "Types of Cookies We Use",
            blocks: &[
                Block::Paragraph("We use several types of cookies on our website:"),
                Block::Subheading("Essential Cookies"),
                Block::Paragraph(
                    "These cookies are necessary for the website to function properly. They enable basic functions like page navigation, secure areas access, and other essential features.",
                ),
                Block::Subheading("Preference Cookies"),
                Block::Paragraph(
                    "These cookies allow our website to remember choices you have made in the past, like your language preference, region, username, or login information.",
                ),
                Block::Subheading("Analytics Cookies"),
                Block::Paragraph(
                    "These cookies collect information about how visitors use our website, including which pages visitors go to most often and if they receive error messages. All information these cookies collect is aggregated and anonymous.",
                ),
                Block::Subheading("Marketing Cookies"),
                Block::Paragraph(
                    "These cookies track visitors across websites to display relevant and engaging advertisements. They are used to measure the effectiveness of our advertising campaigns.",
                ),
            ],
        },
        Section {
            heading: "Third-Party Cookies",
            blocks: &[
                Block::Paragraph(
                    "In addition to our own cookies, we may also use various third-party cookies to report usage statistics, deliver advertisements, and so on. These third-party cookies may include:",
                ),
                Block::Bullets(&[
                    "Analytics providers: Like Google Analytics, to help us understand how users interact with our website",
                    "Social media platforms: When you use social sharing buttons or login through social media accounts",
                    "Advertising networks: To help deliver relevant advertisements based on your interests",
                ]),
            ],
        },
        Section {
            heading: "Managing Your Cookie Preferences",
            blocks: &[
                Block::Paragraph(
                    "You can control and manage cookies in various ways. Most web browsers allow you to manage your cookie preferences. You can:",
                ),
                Block::Bullets(&[
                    "Delete cookies from your device",
                    "Block cookies by activating the setting on your browser that allows you to refuse all or some cookies",
                    "Set your browser to notify you when you receive a cookie",
                    "Use privacy-focused browser extensions",
                ]),
                Block::Paragraph(
                    "Please note that restricting cookies may impact your experience on our website, as some features may not function properly without cookies.",
                ),
            ],
        },
        Section {
            heading: "Cookie Consent",
            blocks: &[Block::Paragraph(
                "When you first visit our website, we may ask for your consent to use cookies through a cookie banner or consent management platform. You can choose to accept all cookies, only essential cookies, or customize your preferences.",
            )],
        },
        Section {
            heading: "Changes to Our Cookies Policy",
            blocks: &[Block::Paragraph(
                "We may update this Cookies Policy from time to time to reflect changes in technology, regulation, or our business practices. Any changes will be posted on this page with an updated revision date.",
            )],
        },
        Section {
            heading: "Contact Us",
            blocks: &[
                Block::Paragraph(
                    "If you have any questions or concerns about our Cookies Policy or our use of cookies, please contact us at:",
                ),
                Block::Bullets(CONTACT_PRIVACY),
            ],
        },
    ],
};
