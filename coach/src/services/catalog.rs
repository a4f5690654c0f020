//! Curated learning-resource catalog
//!
//! Static configuration data merged into generated practice plans,
//! keyed by session mode.

use crate::types::{Resource, ResourceCatalog};
use shared::SessionMode;

fn resource(title: &str, source: &str, note: &str, url: &str) -> Resource {
    Resource {
        title: title.to_string(),
        source: source.to_string(),
        note: note.to_string(),
        url: url.to_string(),
    }
}

/// Curated resources for a mode
///
/// Total over the mode enum, so every session mode resolves to a
/// populated catalog.
pub fn resources_for(mode: SessionMode) -> ResourceCatalog {
    match mode {
        SessionMode::ElevatorPitch => ResourceCatalog {
            books: vec![
                resource(
                    "Talk Like TED",
                    "Carmine Gallo",
                    "Learn the 9 public speaking secrets of the world's top minds",
                    "https://www.amazon.com/Talk-Like-TED-Public-Speaking-Secrets/dp/1250061539",
                ),
                resource(
                    "Pitch Anything",
                    "Oren Klaff",
                    "Master the art of pitching with a proven method for winning deals",
                    "https://www.amazon.com/Pitch-Anything-Innovative-Presenting-Persuading/dp/0071752854",
                ),
            ],
            videos: vec![
                resource(
                    "How to Pitch Your Startup",
                    "Kevin Hale",
                    "Learn how to present your startup idea to investors",
                    "https://www.youtube.com/watch?v=17XZGUX_9iM",
                ),
                resource(
                    "The Secret to Successfully Pitching an Idea",
                    "TED",
                    "Three steps to pitch an idea",
                    "https://www.youtube.com/watch?v=l0hVIH3EnlQ",
                ),
            ],
            courses: vec![resource(
                "Successful Negotiation: Essential Strategies",
                "Coursera",
                "Master pitch techniques and persuasive communication",
                "https://www.coursera.org/learn/negotiation-skills",
            )],
            articles: vec![resource(
                "Tips for giving a powerful elevator pitch",
                "Harvard T.H. Chan School of Public Health",
                "A guide to creating an attention-grabbing pitch",
                "https://hsph.harvard.edu/research/health-communication/resources/elevator-pitch/",
            )],
        },
        SessionMode::LightningTalk => ResourceCatalog {
            books: vec![
                resource(
                    "Presentation Zen",
                    "Garr Reynolds",
                    "Simple ideas on presentation design and delivery for compelling talks",
                    "https://www.amazon.com/Presentation-Zen-Simple-Design-Delivery/dp/0321811984",
                ),
                resource(
                    "The Quick and Easy Way to Effective Speaking",
                    "Dale Carnegie",
                    "Time-tested techniques for impactful short presentations",
                    "https://a.co/d/47aztX1",
                ),
            ],
            videos: vec![
                resource(
                    "The Secret Structure of Great Talks",
                    "Nancy Duarte",
                    "The hidden patterns in successful presentations",
                    "https://www.youtube.com/watch?v=1nYFpuc2Umk",
                ),
                resource(
                    "How to Speak So That People Want to Listen",
                    "Julian Treasure",
                    "Powerful speaking techniques",
                    "https://www.youtube.com/watch?v=eIho2S0ZahI",
                ),
            ],
            courses: vec![resource(
                "Introduction to Public Speaking",
                "Coursera",
                "A proven framework for delivering impactful presentations",
                "https://www.coursera.org/learn/public-speaking",
            )],
            articles: vec![resource(
                "Lightning Talks and Ignite Talks: A Beginners Guide",
                "Samantha Pratt Lile",
                "Lightning talk tips and best practices",
                "https://www.beautiful.ai/blog/lightning-talks-and-ignite-talks-a-beginners-guide",
            )],
        },
        SessionMode::ProductDemo => ResourceCatalog {
            books: vec![
                resource(
                    "Just F*ing Demo!",
                    "Rob Falcone",
                    "Learn to deliver product demonstrations that close deals",
                    "https://www.amazon.com/Demo-Deliver-Product-Demonstrations-Deals/dp/1734463104",
                ),
                resource(
                    "The Mom Test",
                    "Rob Fitzpatrick",
                    "Master customer conversations and effective product presentations",
                    "https://www.amazon.com/Mom-Test-customers-business-everyone/dp/1492180742",
                ),
            ],
            videos: vec![
                resource(
                    "The secret to better product demos",
                    "Y Combinator",
                    "Partner advice for demos",
                    "https://www.youtube.com/shorts/rNPJKpmp3TM",
                ),
                resource(
                    "iPhone 2007 Presentation",
                    "Steve Jobs",
                    "The iPhone introduction at Macworld 2007",
                    "https://www.youtube.com/watch?v=MnrJzXM7a6o",
                ),
            ],
            courses: vec![resource(
                "Product Management Fundamentals",
                "edX (University of Maryland)",
                "Learn to market products effectively",
                "https://www.edx.org/learn/product-management/the-university-of-maryland-college-park-product-management-fundamentals",
            )],
            articles: vec![resource(
                "How to Deliver the Perfect Product Demo",
                "Meredith Hart",
                "Best practices for showcasing your product",
                "https://blog.hubspot.com/sales/product-demo",
            )],
        },
        SessionMode::ProjectUpdate => ResourceCatalog {
            books: vec![
                resource(
                    "No One Understands You and What to Do About It",
                    "Heidi Grant Halvorson",
                    "How to come across as you intend",
                    "https://www.amazon.com/One-Understands-You-What-About/dp/1625274122",
                ),
                resource(
                    "The Story Factor",
                    "Annette Simmons",
                    "Use storytelling to persuade, motivate, and inspire at work",
                    "https://a.co/d/bjfFe8L",
                ),
            ],
            videos: vec![
                resource(
                    "What is a Daily Standup?",
                    "Atlassian",
                    "Tips to help you through your first daily standup",
                    "https://www.youtube.com/watch?v=iUjWjt4E6rs",
                ),
                resource(
                    "How to Run Status Update Meetings",
                    "YouTube",
                    "Tips for status updates",
                    "https://www.youtube.com/shorts/VqpjeAXPayM",
                ),
            ],
            courses: vec![resource(
                "Communication Skills for Engineers",
                "Coursera",
                "Master technical communication at work",
                "https://www.coursera.org/specializations/leadership-communication-engineers",
            )],
            articles: vec![resource(
                "How to Run a Better Status Meeting",
                "Project Management Institute",
                "Guidelines for impactful status meetings",
                "https://www.pmi.org/blog/run-an-effective-status-meeting",
            )],
        },
        SessionMode::ThesisDefense => ResourceCatalog {
            books: vec![
                resource(
                    "How to Write a Thesis",
                    "Umberto Eco",
                    "The guide to researching and writing a thesis",
                    "https://www.amazon.com/How-Write-Thesis-MIT-Press/dp/0262527138",
                ),
                resource(
                    "Scientific Presentation Skills",
                    "Martins Zaumanis",
                    "How to deliver powerful academic presentations",
                    "https://a.co/d/6qdffZF",
                ),
            ],
            videos: vec![
                resource(
                    "The Perfect Defense: The Oral Defense of a Dissertation",
                    "Dr. Valerie Balester",
                    "Secrets to a flawless oral dissertation defense",
                    "https://www.youtube.com/watch?v=edQv9OKvfdU",
                ),
                resource(
                    "10 mistakes to avoid when defending your thesis",
                    "YouTube",
                    "Top mistakes to avoid when defending your thesis",
                    "https://www.youtube.com/watch?v=_R3mloi2TsA",
                ),
            ],
            courses: vec![resource(
                "Good with Words: Speaking and Presenting",
                "Coursera",
                "How to enhance the message you want to deliver",
                "https://www.coursera.org/specializations/good-with-words-speaking-presenting",
            )],
            articles: vec![resource(
                "How to Pull Off Your Thesis Defense With a Great Presentation",
                "Samantha Pratt Lile",
                "Tips to help you nail your presentation",
                "https://www.beautiful.ai/blog/how-to-pull-off-your-thesis-defense-with-a-great-presentation",
            )],
        },
    }
}
