//! The ordered, immutable essay collection the reader renders.

use std::collections::HashSet;
use std::sync::OnceLock;

use shared::domain::{Essay, EssayId};
use shared::error::CatalogError;

/// Ordered collection of essays. Construction validates id integrity; after
/// that the catalog is read-only and enumeration order is insertion order.
#[derive(Debug, Clone)]
pub struct Catalog {
    essays: Vec<Essay>,
}

impl Catalog {
    /// Build a catalog from authored records, rejecting blank or duplicate ids.
    pub fn new(essays: Vec<Essay>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for essay in &essays {
            if essay.id.as_str().trim().is_empty() {
                return Err(CatalogError::BlankId);
            }
            if !seen.insert(essay.id.clone()) {
                return Err(CatalogError::DuplicateId {
                    id: essay.id.as_str().to_string(),
                });
            }
        }
        Ok(Self { essays })
    }

    /// The compiled-in catalog, shared process-wide.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        // Id uniqueness of the built-in data is covered by a unit test, so the
        // validating constructor is not re-run here.
        BUILTIN.get_or_init(|| Catalog {
            essays: builtin_essays(),
        })
    }

    pub fn essays(&self) -> &[Essay] {
        &self.essays
    }

    pub fn iter(&self) -> impl Iterator<Item = &Essay> {
        self.essays.iter()
    }

    pub fn get(&self, id: &EssayId) -> Option<&Essay> {
        self.essays.iter().find(|essay| &essay.id == id)
    }

    pub fn contains(&self, id: &EssayId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.essays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.essays.is_empty()
    }
}

/// The three essays of the site, in display order.
pub(crate) fn builtin_essays() -> Vec<Essay> {
    vec![
        Essay {
            id: EssayId::new("digital-minimalism"),
            title: "Digital Minimalism in the Age of Infinite Scroll".to_string(),
            excerpt: "Exploring how we can reclaim our attention and find meaningful engagement \
                      with technology in a world designed to distract us."
                .to_string(),
            date: "December 15, 2024".to_string(),
            read_time: "8 min read".to_string(),
            content: concat!(
                "In our hyperconnected world, the average person checks their phone 96 times per day. ",
                "We've become slaves to the notification, servants to the scroll, prisoners of our own ",
                "digital devices. But what if there was another way?",
                "\n\n",
                "Digital minimalism isn't about abandoning technology entirely\u{2014}it's about being ",
                "intentional with how we engage with it. It's about choosing tools that serve our values ",
                "and ruthlessly eliminating those that don't.",
                "\n\n",
                "The philosophy is simple: clutter is costly. Not just in terms of physical space, but in ",
                "terms of attention, time, and mental energy. Every app on your phone, every subscription ",
                "service, every digital commitment is competing for your most precious resource: your ",
                "consciousness.",
                "\n\n",
                "I've spent the last year experimenting with digital minimalism, and the results have been ",
                "transformative. By carefully curating my digital environment, I've found more time for ",
                "deep work, meaningful relationships, and the kind of sustained thinking that leads to ",
                "genuine insight.",
                "\n\n",
                "The key is to start small. Begin by conducting a digital declutter\u{2014}remove apps that ",
                "don't add clear value to your life. Then, slowly reintroduce only those tools that pass a ",
                "strict test: do they support something you deeply value?",
                "\n\n",
                "In a world of infinite options, the power to choose nothing is perhaps the most valuable ",
                "skill we can develop.",
            )
            .to_string(),
            featured: true,
        },
        Essay {
            id: EssayId::new("art-of-questioning"),
            title: "The Art of Asking Better Questions".to_string(),
            excerpt: "Why the quality of our questions determines the quality of our thinking, and \
                      how to develop this underappreciated skill."
                .to_string(),
            date: "November 28, 2024".to_string(),
            read_time: "6 min read".to_string(),
            content: concat!(
                "Questions are the engines of intellect, the foundation of all learning, and the root of ",
                "all progress. Yet we rarely spend time thinking about how to ask better questions.",
                "\n\n",
                "The right question can unlock insights that years of statements cannot. It can challenge ",
                "assumptions, reveal hidden connections, and open up entirely new avenues of thought. The ",
                "wrong question, meanwhile, can lead us down rabbit holes and waste precious mental energy.",
                "\n\n",
                "So what makes a question good? First, it should be specific enough to be actionable but ",
                "broad enough to be interesting. \"How can I be happier?\" is too vague. \"What specific ",
                "daily practice could I implement that would most improve my sense of well-being?\" is ",
                "better.",
                "\n\n",
                "Second, good questions challenge our existing frameworks. Instead of asking \"How can I ",
                "get better at X?\", try \"What assumptions am I making about X that might be wrong?\" This ",
                "shifts us from optimization mode to discovery mode.",
                "\n\n",
                "Third, the best questions often have a temporal element. \"What would this look like if ",
                "it were easy?\" \"What will matter most in ten years?\" \"What would I do if I knew I ",
                "couldn't fail?\" These questions help us break free from current constraints and think ",
                "more creatively.",
                "\n\n",
                "The meta-skill here is learning to question your questions. Before diving into solving a ",
                "problem, spend time ensuring you're solving the right problem. As Einstein allegedly ",
                "said, \"If I had an hour to solve a problem, I'd spend 55 minutes defining it and 5 ",
                "minutes solving it.\"",
                "\n\n",
                "In a world overflowing with answers, the scarce resource is good questions. Learn to ask ",
                "them, and you'll find that the world becomes infinitely more interesting.",
            )
            .to_string(),
            featured: true,
        },
        Essay {
            id: EssayId::new("philosophy-of-simplicity"),
            title: "The Philosophy of Simplicity".to_string(),
            excerpt: "An exploration of how embracing simplicity in design, thought, and life can \
                      lead to profound clarity and effectiveness."
                .to_string(),
            date: "October 12, 2024".to_string(),
            read_time: "7 min read".to_string(),
            content: concat!(
                "Simplicity is the ultimate sophistication. This principle, attributed to Leonardo da ",
                "Vinci, captures something essential about how we should approach both design and life.",
                "\n\n",
                "But simplicity is often misunderstood. It's not about having less for the sake of having ",
                "less\u{2014}it's about having exactly what you need, nothing more, nothing less. It's ",
                "about clarity of purpose and elegance of execution.",
                "\n\n",
                "In design, simplicity means removing everything that doesn't serve the core function. It ",
                "means asking not \"what can we add?\" but \"what can we remove?\" Every element should ",
                "earn its place through utility or beauty, preferably both.",
                "\n\n",
                "In thought, simplicity means cutting through complexity to find the essential truth. It ",
                "means being able to explain complex ideas in simple terms\u{2014}not because you're ",
                "dumbing them down, but because you understand them so deeply that their essence becomes ",
                "clear.",
                "\n\n",
                "In life, simplicity means aligning your actions with your values and removing the ",
                "friction that prevents you from living authentically. It means saying no to good ",
                "opportunities so you can say yes to great ones.",
                "\n\n",
                "The path to simplicity is often complex. It requires discipline, taste, and the courage ",
                "to make difficult choices. But the reward\u{2014}clarity, focus, and a sense of ",
                "rightness\u{2014}is worth the effort.",
                "\n\n",
                "As Antoine de Saint-Exup\u{e9}ry wrote, \"It seems that perfection is attained not when ",
                "there is nothing more to add, but when there is nothing more to remove.\" In a world that ",
                "constantly pressures us to add more, the radical act is to subtract.",
            )
            .to_string(),
            featured: false,
        },
    ]
}
