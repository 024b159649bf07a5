//! Per-phase career guidance: the personalised plan shown after the
//! questionnaire and saved as a `career_path` document.

use serde::Serialize;

use crate::documents::phase::CareerPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerGuidance {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub recommendations: [&'static str; 5],
    pub resources: [&'static str; 4],
}

/// Guidance for a phase. `None` (a phase that could not be read) gets the
/// general plan.
pub fn guidance_for(phase: Option<CareerPhase>) -> CareerGuidance {
    match phase {
        Some(CareerPhase::Student) => CareerGuidance {
            title: "Launch Your Career",
            subtitle: "Steps for students and recent graduates",
            recommendations: [
                "Focus on internships and entry-level positions to gain practical experience",
                "Build a portfolio showcasing academic projects and skills",
                "Network with alumni and industry professionals",
                "Participate in career fairs and campus recruitment",
                "Consider certifications to complement your degree",
            ],
            resources: [
                "LinkedIn Learning - Career Essentials",
                "GitHub Student Developer Pack",
                "Internship portals like Handshake or Indeed",
                "University career services",
            ],
        },
        Some(CareerPhase::EntryLevel) => CareerGuidance {
            title: "Accelerate Your Growth",
            subtitle: "Strategies for early-career professionals",
            recommendations: [
                "Seek mentorship within your organization",
                "Take on challenging projects to expand your skill set",
                "Identify skills gaps and pursue relevant training",
                "Build your professional network in your industry",
                "Document your achievements for future promotion opportunities",
            ],
            resources: [
                "Industry-specific certifications",
                "Professional associations in your field",
                "Online courses on platforms like Coursera or Udemy",
                "Networking events and industry conferences",
            ],
        },
        Some(CareerPhase::CareerSwitcher) => CareerGuidance {
            title: "Navigate Your Transition",
            subtitle: "Keys to successful career pivoting",
            recommendations: [
                "Identify transferable skills from your previous experience",
                "Gain relevant qualifications for your target field",
                "Build connections in your new industry",
                "Consider transitional roles that bridge your past and future",
                "Create a resume that highlights relevant experience",
            ],
            resources: [
                "Career transition coaches",
                "Skill-building bootcamps",
                "LinkedIn groups for your target industry",
                "Informational interviews with professionals in your desired field",
            ],
        },
        Some(CareerPhase::Experienced) => CareerGuidance {
            title: "Elevate Your Impact",
            subtitle: "Strategies for seasoned professionals",
            recommendations: [
                "Pursue leadership opportunities within your organization",
                "Develop your personal brand as an industry expert",
                "Consider executive education or advanced certifications",
                "Mentor junior colleagues to strengthen your leadership skills",
                "Explore board positions or advisory roles",
            ],
            resources: [
                "Executive education programs",
                "Industry speaking opportunities",
                "Professional coaching",
                "Leadership networks and industry forums",
            ],
        },
        Some(CareerPhase::Unsure) => CareerGuidance {
            title: "Explore Your Potential",
            subtitle: "Finding your career direction",
            recommendations: [
                "Take career assessment tests to identify your strengths and interests",
                "Research growing industries that align with your skills",
                "Conduct informational interviews across different fields",
                "Consider job shadowing or volunteering to explore options",
                "Reflect on what gives you satisfaction in your work",
            ],
            resources: [
                "Career counseling services",
                "Personality and strength assessments",
                "Industry growth reports and job market analysis",
                "Career exploration workshops",
            ],
        },
        None => CareerGuidance {
            title: "Your Personalized Career Plan",
            subtitle: "Next steps for your professional growth",
            recommendations: [
                "Define clear short-term and long-term career goals",
                "Identify skills gaps and create a development plan",
                "Build a strong professional network",
                "Keep your resume and LinkedIn profile updated",
                "Stay current with industry trends and technologies",
            ],
            resources: [
                "Industry-specific online communities",
                "Professional development courses",
                "Career coaching services",
                "Networking events and conferences",
            ],
        },
    }
}
