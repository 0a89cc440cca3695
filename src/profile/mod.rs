//! Curated static resources about Andrew Bolster.
//!
//! Each resource is a markdown document registered under a
//! `resource://andrew-bolster/…` URI and served verbatim; there is no I/O
//! behind them.

/// A static markdown resource exposed over MCP.
#[derive(Debug, Clone, Copy)]
pub struct ProfileResource {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub body: &'static str,
}

const PERSONAL_WEBSITE: &str = "\
# Andrew Bolster - Personal Website

**URL:** https://andrewbolster.info/

Andrew Bolster's main personal website featuring:
- Professional background and current role as Senior R&D Manager (Data Science) at Black Duck Software
- Technical blog with posts on AI, machine learning, autonomous systems, and software development
- Research interests including generative AI, software development, and autonomous systems
- Personal projects and community involvement

Key sections:
- Resume and professional experience
- Blog posts on technical topics
- About page with background information
";

const PROFESSIONAL_PROFILE: &str = "\
# Andrew Bolster - Professional Profile

## Current Roles
- **Senior R&D Manager (Data Science)** at Black Duck Software
- **Director and Treasurer** at BSides Belfast

## Background
- PhD Research at University of Liverpool (Anglo-French Defence Programme)
- Former Data Scientist at AlertLogic
- Specializes in autonomous underwater vehicles and trust frameworks
- Extensive experience in machine learning and cybersecurity

## Key Areas of Expertise
- Data Science and Machine Learning
- Generative AI and AI Ethics
- Autonomous Systems
- Software Development
- Cybersecurity and Trust Frameworks

## Academic Achievements
- Queen's University Belfast TG Christie Award
- Queen's University Belfast Linggard Prize
- IET Excellence Grant for Academic Progress and STEM outreach
";

const FARSET_LABS: &str = "\
# Farset Labs - Belfast Hackerspace

**Founding Director:** Andrew Bolster

Farset Labs is Northern Ireland's first hackerspace, established in January 2012 and located in Weavers Court Business Park, Belfast.

## Key Information
- **Website:** https://www.farsetlabs.org.uk/
- **Location:** Sandy Row, Belfast
- **Founded:** January 2012
- **Status:** First collaborative technology space in Northern Ireland

## Mission
A collaborative hub for technology professionals and enthusiasts in Belfast and Northern Ireland, providing:
- Workspace for technology projects
- Community events and workshops
- Networking opportunities for the local tech community
- Support for STEM education and outreach

## Andrew's Role
As founding director, Andrew has been instrumental in building Farset Labs as a community hub while ensuring the organization remains true to its core values and mission.
";

const SOCIAL_MEDIA: &str = "\
# Andrew Bolster - Social Media & Professional Networks

## Professional Profiles
- **LinkedIn:** https://www.linkedin.com/in/andrewbolster/
- **GitHub:** https://github.com/andrewbolster
- **X (Twitter):** https://x.com/bolster

## Professional Activities
- Regular speaker at technology conferences
- Active contributor to open source projects
- Technical blogger and thought leader
- Community organizer and mentor

## Conference Speaking
- TEDx appearances
- Regional and national innovation conferences
- International trade delegations representing Northern Ireland tech community
- BSides Belfast and other security conferences
";

const RESEARCH_INTERESTS: &str = "\
# Andrew Bolster - Research Interests

## Current Focus Areas
- **Generative AI** impact on software development
- **AI/Machine Learning** methodologies and ethics
- **Experience injection** for Large Language Models
- **AIOps** maturity models and implementation

## Academic Background
- **PhD Research:** Cyber-security and autonomous underwater vehicles at Queen's University Belfast
- **Specialization:** Trust frameworks in insecure network environments
- **Previous Research:** Distributed systems and behavior-based control systems

## Technical Interests
- Autonomous systems and robotics
- Software engineering best practices
- CUDA programming and high-performance computing
- Network security and trust mechanisms
- Data science and machine learning applications

## Publications and Writing
- Regular technical blog posts at andrewbolster.info
- Academic publications in autonomous systems and cybersecurity
- Community articles and opinion pieces on technology innovation
";

const COMMUNITY_INVOLVEMENT: &str = "\
# Andrew Bolster - Community Involvement

## Current Organizational Roles
- **Director and Treasurer:** BSides Belfast (Information Security Conference)
- **Founding Director:** Farset Labs (Belfast Hackerspace)
- **Treasurer:** Open Government Northern Ireland
- **Steering Group Member:** InfoSec NI

## Community Activities
- **STEM Outreach:** Active in science and technology education initiatives
- **Mentorship:** Supporting emerging technology professionals
- **Public Speaking:** Regular appearances at conferences and events
- **Policy Engagement:** Contributing to Northern Ireland innovation strategy discussions

## Recognition and Awards
- Queen's University Belfast TG Christie Award (most promising incoming research student)
- Queen's University Belfast Linggard Prize (best Masters project in Communication Engineering)
- IET Excellence Grant for Academic Progress and STEM outreach activities

## Community Impact
Andrew has been instrumental in building Northern Ireland's technology ecosystem, particularly through:
- Establishing collaborative spaces for technologists
- Promoting innovation and entrepreneurship
- Representing NI tech community internationally
- Supporting diversity and inclusion in technology
";

const TECHNICAL_BLOG: &str = "\
# Andrew Bolster - Technical Blog

**Blog URL:** https://andrewbolster.info/blog/

Andrew maintains an active technical blog covering a wide range of topics in technology, research, and innovation.

## Recent Blog Topics
- Generative AI and its impact on software development
- Machine learning methodologies and best practices
- Autonomous systems and robotics
- Software engineering techniques
- Data science workflows and tools
- Technology policy and innovation strategy

## Writing Style and Focus
- Practical, hands-on technical tutorials
- Research insights and academic perspectives
- Industry analysis and commentary
- Community building and technology advocacy
- Open source software and tools

## Notable Series
- PhD diary entries during research
- Technology setup and configuration guides
- Analysis of Northern Ireland's innovation landscape
- Reviews of technical books and resources

The blog serves as both a technical resource and a window into Andrew's thinking on current technology trends and challenges.
";

const RESOURCES: &[ProfileResource] = &[
    ProfileResource {
        uri: "resource://andrew-bolster/personal-website",
        name: "Personal Website",
        description: "Andrew Bolster's main personal website and blog.",
        body: PERSONAL_WEBSITE,
    },
    ProfileResource {
        uri: "resource://andrew-bolster/professional-profile",
        name: "Professional Profile",
        description: "Andrew Bolster's professional background and current roles.",
        body: PROFESSIONAL_PROFILE,
    },
    ProfileResource {
        uri: "resource://andrew-bolster/farset-labs",
        name: "Farset Labs",
        description:
            "Information about Farset Labs, Northern Ireland's first hackerspace co-founded by Andrew Bolster.",
        body: FARSET_LABS,
    },
    ProfileResource {
        uri: "resource://andrew-bolster/social-media",
        name: "Social Media",
        description: "Andrew Bolster's social media and professional networking profiles.",
        body: SOCIAL_MEDIA,
    },
    ProfileResource {
        uri: "resource://andrew-bolster/research-interests",
        name: "Research Interests",
        description: "Andrew Bolster's research interests and academic focus areas.",
        body: RESEARCH_INTERESTS,
    },
    ProfileResource {
        uri: "resource://andrew-bolster/community-involvement",
        name: "Community Involvement",
        description: "Andrew Bolster's community involvement and organizational roles.",
        body: COMMUNITY_INVOLVEMENT,
    },
    ProfileResource {
        uri: "resource://andrew-bolster/technical-blog",
        name: "Technical Blog",
        description: "Information about Andrew Bolster's technical blog and writing.",
        body: TECHNICAL_BLOG,
    },
];

/// All registered profile resources.
pub fn resources() -> &'static [ProfileResource] {
    RESOURCES
}

/// Look up a resource by URI.
pub fn find(uri: &str) -> Option<&'static ProfileResource> {
    RESOURCES.iter().find(|r| r.uri == uri)
}
