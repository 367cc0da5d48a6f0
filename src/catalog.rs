//! Content Catalog - read-only site collections and client-side filters.
//!
//! The site previously mixed hardcoded page arrays with collections fetched
//! from a remote table store. Both now live behind this one provider: a
//! `Catalog` constructed once at startup that owns every collection.

use serde::Serialize;

use crate::schema::BlogPost;

/// Service offering shown on the services page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

/// Step of the engagement process
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    pub step: String,
    pub title: String,
    pub description: String,
}

/// Completed project shown on the projects page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub category_label: String,
    pub budget: String,
    pub year: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
}

/// Team member profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub description: String,
    pub image: String,
    pub specialties: Vec<String>,
    pub email: String,
}

/// Department headcount summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub name: String,
    pub count: u32,
    pub description: String,
}

/// Open position shown on the careers page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: i32,
    pub title: String,
    pub department: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
}

/// Owns every read-only collection; constructed once at process start.
pub struct Catalog {
    services: Vec<Service>,
    process_steps: Vec<ProcessStep>,
    projects: Vec<Project>,
    team_members: Vec<TeamMember>,
    departments: Vec<Department>,
    job_listings: Vec<JobListing>,
}

impl Catalog {
    pub fn new() -> Self {
        let mut job_listings = seed_job_listings();
        // The careers page always showed openings ordered by title.
        job_listings.sort_by(|a, b| a.title.cmp(&b.title));

        Self {
            services: seed_services(),
            process_steps: seed_process_steps(),
            projects: seed_projects(),
            team_members: seed_team_members(),
            departments: seed_departments(),
            job_listings,
        }
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn process_steps(&self) -> &[ProcessStep] {
        &self.process_steps
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn team_members(&self) -> &[TeamMember] {
        &self.team_members
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Open positions, ordered by title.
    pub fn job_listings(&self) -> &[JobListing] {
        &self.job_listings
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Filters
// ============================================================================
//
// These are the predicates the pages evaluate against already-fetched
// collections; nothing here goes back to the server.

/// Projects matching a category filter; `"all"` disables the filter. An
/// unknown category yields an empty list, never an error.
pub fn filter_projects<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| category == "all" || project.category == category)
        .collect()
}

/// Blog posts matching a case-insensitive search over title and excerpt plus
/// a category filter (`"all"` disables the category check).
pub fn filter_blog_posts<'a>(
    posts: &'a [BlogPost],
    search: &str,
    category: &str,
) -> Vec<&'a BlogPost> {
    let search = search.to_lowercase();
    posts
        .iter()
        .filter(|post| {
            let matches_search = post.title.to_lowercase().contains(&search)
                || post.excerpt.to_lowercase().contains(&search);
            let matches_category = category == "all" || post.category == category;
            matches_search && matches_category
        })
        .collect()
}

// ============================================================================
// Seed content
// ============================================================================

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

fn seed_services() -> Vec<Service> {
    vec![
        Service {
            title: "Specialist Consultants for Geotechnical Engineering Design".to_string(),
            description: String::new(),
            features: strings(&[
                "All types of ground work design, Deep Excavation",
                "Basement Excavation Design for basement construction",
                "Slope stability analyses & Ground Improvement",
                "Earth Retaining & Stabilizing Structure (ERSS)",
                "Geotechnical Building Work (GBW) Design",
                "Soil Nail & Ground Anchor Design",
                "Tunnelling & Pipe Jacking Design",
                "Deep trench excavation and caisson design",
                "Deep & Shallow Foundation Design",
            ]),
        },
        Service {
            title: "Civil and Infrastructure Design Consultancy".to_string(),
            description: String::new(),
            features: strings(&[
                "Curtain Wall, Cladding, Skylight, Façade",
                "Underground Structure design",
                "Canopy",
                "Barrier design",
                "Tentages Design and endorsement",
                "Demolition work with the construction sequences",
                "Road Works",
                "Drainage Works design",
                "General Building Works design",
            ]),
        },
        Service {
            title: "Structural, Civil & Geotechnical engineering drawings".to_string(),
            description: String::new(),
            features: strings(&[
                "MEP (M&E) Drawings",
                "Architectural Drawings / Interior Drawings",
                "Technical Drawings",
                "Shop Drawings",
                "As Built Drawings",
                "Schematic Drawings",
                "Revisions and Mark Up Drawings",
                "Building Information Modelling (BIM)",
                "3D Drawing / 3D Modelling",
                "3D Rendering / 3D Design",
                "3D Animation / 3D Simulation / 3D Walkthrough",
                "3D Laser Scanning",
            ]),
        },
        Service {
            title: "Architectural and interior designs".to_string(),
            description: String::new(),
            features: strings(&[
                "Architectural design & space planning",
                "Technical planning drawings services",
                "Spatial planning",
                "3D drawings",
                "Interior and exterior renovation design",
                "Office furniture, lighting, fixture and accessory selection",
                "Wallpaper, curtain and soft furnishing selection",
            ]),
        },
        Service {
            title: "Structural Design Consultancy".to_string(),
            description: "Building design such as".to_string(),
            features: strings(&[
                "High Rise Building Design, Addition and alteration work to the existing \
                 building, Bungalow & Detached house design & Reconstruction houses",
                "Factory Design",
                "Specification and Repair Proposals to the damage structural elements",
            ]),
        },
        Service {
            title: "Structural Inspection".to_string(),
            description: String::new(),
            features: strings(&["Periodic Structural Inspection"]),
        },
        Service {
            title: "Specialist Engineering Works".to_string(),
            description: String::new(),
            features: strings(&[
                "Qualified Erosion Control Professional",
                "Design for safety professional consultancy services",
                "Design of Water, Drainage and Sewer",
            ]),
        },
        Service {
            title: "Value Engineering Services".to_string(),
            description: String::new(),
            features: strings(&[
                "Value engineering design and consultancy to do the economical design",
            ]),
        },
        Service {
            title: "Tender / Feasibility stages design".to_string(),
            description: String::new(),
            features: strings(&[
                "Provide technical, financial, legal and sustainable viability for a tender \
                 project",
            ]),
        },
    ]
}

fn seed_process_steps() -> Vec<ProcessStep> {
    vec![
        ProcessStep {
            step: "01".to_string(),
            title: "Initial Consultation".to_string(),
            description: "We begin every project with a thorough consultation to understand \
                          your needs, objectives, and constraints."
                .to_string(),
        },
        ProcessStep {
            step: "02".to_string(),
            title: "Design & Planning".to_string(),
            description: "Our expert team develops comprehensive designs using the latest \
                          technology and best practices."
                .to_string(),
        },
        ProcessStep {
            step: "03".to_string(),
            title: "Implementation".to_string(),
            description: "We manage the construction process with rigorous quality control \
                          and safety standards."
                .to_string(),
        },
        ProcessStep {
            step: "04".to_string(),
            title: "Project Delivery".to_string(),
            description: "We ensure successful project completion with final inspections \
                          and ongoing support."
                .to_string(),
        },
    ]
}

fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Metropolitan Bridge Project".to_string(),
            category: "infrastructure".to_string(),
            category_label: "Infrastructure".to_string(),
            budget: "$25M".to_string(),
            year: "2023".to_string(),
            description: "A $25M cable-stayed bridge project featuring innovative design \
                          and sustainable materials."
                .to_string(),
            image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400"
                .to_string(),
            tags: strings(&[
                "Bridge Design",
                "Structural Engineering",
                "Sustainable Materials",
            ]),
        },
        Project {
            id: 2,
            title: "Green Energy Infrastructure".to_string(),
            category: "environmental".to_string(),
            category_label: "Environmental".to_string(),
            budget: "$18M".to_string(),
            year: "2023".to_string(),
            description: "Sustainable energy infrastructure supporting renewable power \
                          generation and distribution."
                .to_string(),
            image: "https://images.unsplash.com/photo-1466611653911-95081537e5b7?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400"
                .to_string(),
            tags: strings(&["Solar Energy", "Grid Integration", "Environmental Impact"]),
        },
        Project {
            id: 3,
            title: "Downtown Revitalization".to_string(),
            category: "urban".to_string(),
            category_label: "Urban Planning".to_string(),
            budget: "$45M".to_string(),
            year: "2022".to_string(),
            description: "Comprehensive urban renewal project transforming 50 acres of \
                          downtown core infrastructure."
                .to_string(),
            image: "https://images.unsplash.com/photo-1477959858617-67f85cf4f1df?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400"
                .to_string(),
            tags: strings(&[
                "Urban Design",
                "Mixed-Use Development",
                "Community Planning",
            ]),
        },
        Project {
            id: 4,
            title: "Water Treatment Facility".to_string(),
            category: "water".to_string(),
            category_label: "Water Resources".to_string(),
            budget: "$32M".to_string(),
            year: "2022".to_string(),
            description: "State-of-the-art water treatment plant serving 500,000 residents \
                          with advanced filtration systems."
                .to_string(),
            image: "https://images.unsplash.com/photo-1541888946425-d81bb19240f5?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400"
                .to_string(),
            tags: strings(&[
                "Water Treatment",
                "Environmental Engineering",
                "Public Health",
            ]),
        },
        Project {
            id: 5,
            title: "Commercial Complex Development".to_string(),
            category: "infrastructure".to_string(),
            category_label: "Infrastructure".to_string(),
            budget: "$28M".to_string(),
            year: "2021".to_string(),
            description: "Mixed-use development with integrated transportation and utility \
                          infrastructure planning."
                .to_string(),
            image: "https://images.unsplash.com/photo-1504307651254-35680f356dfd?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400"
                .to_string(),
            tags: strings(&[
                "Commercial Development",
                "Infrastructure Integration",
                "Transportation Planning",
            ]),
        },
        Project {
            id: 6,
            title: "Wetland Restoration Project".to_string(),
            category: "environmental".to_string(),
            category_label: "Environmental".to_string(),
            budget: "$8M".to_string(),
            year: "2021".to_string(),
            description: "Ecological restoration of 200-acre wetland system with \
                          sustainable stormwater management."
                .to_string(),
            image: "https://images.unsplash.com/photo-1547036967-23d11aacaee0?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400"
                .to_string(),
            tags: strings(&[
                "Ecological Restoration",
                "Stormwater Management",
                "Biodiversity Conservation",
            ]),
        },
    ]
}

fn seed_team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: 1,
            name: "James Mitchell, PE".to_string(),
            role: "Principal Engineer & Founder".to_string(),
            description: "25+ years of experience in civil engineering with expertise in \
                          large-scale infrastructure projects."
                .to_string(),
            image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300"
                .to_string(),
            specialties: strings(&["MS Civil Engineering", "PE Licensed"]),
            email: "james@sterlingcivil.com".to_string(),
        },
        TeamMember {
            id: 2,
            name: "Sarah Thompson, PE".to_string(),
            role: "Senior Project Manager".to_string(),
            description: "Specializes in environmental engineering and sustainable \
                          infrastructure development."
                .to_string(),
            image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300"
                .to_string(),
            specialties: strings(&["Environmental Engineering", "LEED AP"]),
            email: "sarah@sterlingcivil.com".to_string(),
        },
        TeamMember {
            id: 3,
            name: "Michael Rodriguez, PE".to_string(),
            role: "Structural Engineering Director".to_string(),
            description: "Expert in structural analysis and design with focus on seismic \
                          engineering and bridge design."
                .to_string(),
            image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300"
                .to_string(),
            specialties: strings(&["Structural Engineering", "Bridge Design"]),
            email: "michael@sterlingcivil.com".to_string(),
        },
        TeamMember {
            id: 4,
            name: "Emily Chen, PE".to_string(),
            role: "Transportation Engineer".to_string(),
            description: "Transportation planning and traffic engineering specialist with \
                          smart city expertise."
                .to_string(),
            image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300"
                .to_string(),
            specialties: strings(&["Transportation", "Smart Cities"]),
            email: "emily@sterlingcivil.com".to_string(),
        },
        TeamMember {
            id: 5,
            name: "David Kim".to_string(),
            role: "Construction Manager".to_string(),
            description: "Construction oversight and quality control specialist with 15+ \
                          years of field experience."
                .to_string(),
            image: "https://images.unsplash.com/photo-1560250097-0b93528c311a?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300"
                .to_string(),
            specialties: strings(&["Construction Management", "Safety Management"]),
            email: "david@sterlingcivil.com".to_string(),
        },
        TeamMember {
            id: 6,
            name: "Lisa Park".to_string(),
            role: "Water Resources Engineer".to_string(),
            description: "Hydraulic modeling and stormwater management expert with focus \
                          on sustainable solutions."
                .to_string(),
            image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300"
                .to_string(),
            specialties: strings(&["Water Resources", "Hydraulic Modeling"]),
            email: "lisa@sterlingcivil.com".to_string(),
        },
    ]
}

fn seed_departments() -> Vec<Department> {
    vec![
        Department {
            name: "Structural Engineering".to_string(),
            count: 18,
            description: "Bridge design, building analysis, and seismic engineering".to_string(),
        },
        Department {
            name: "Transportation".to_string(),
            count: 15,
            description: "Highway design, traffic engineering, and smart transportation systems"
                .to_string(),
        },
        Department {
            name: "Environmental".to_string(),
            count: 12,
            description: "Environmental impact assessment and sustainable design".to_string(),
        },
        Department {
            name: "Water Resources".to_string(),
            count: 10,
            description: "Hydraulic modeling, stormwater management, and water treatment"
                .to_string(),
        },
        Department {
            name: "Urban Planning".to_string(),
            count: 8,
            description: "Master planning, zoning analysis, and community development"
                .to_string(),
        },
        Department {
            name: "Construction Management".to_string(),
            count: 12,
            description: "Project oversight, quality control, and safety management".to_string(),
        },
    ]
}

fn seed_job_listings() -> Vec<JobListing> {
    vec![
        JobListing {
            id: 1,
            title: "Senior Structural Engineer".to_string(),
            department: "Structural Engineering".to_string(),
            job_type: "Full-time".to_string(),
            location: "Downtown Office".to_string(),
            salary: "$95,000 - $125,000".to_string(),
            description: "Lead structural design for bridge and high-rise projects, from \
                          concept through construction support."
                .to_string(),
            requirements: strings(&[
                "PE license",
                "8+ years of structural design experience",
                "Proficiency with finite element analysis software",
                "Bridge or high-rise project portfolio",
            ]),
            benefits: strings(&[
                "Health, dental, and vision insurance",
                "401(k) with company match",
                "Professional development budget",
            ]),
        },
        JobListing {
            id: 2,
            title: "Water Resources Engineer".to_string(),
            department: "Water Resources".to_string(),
            job_type: "Full-time".to_string(),
            location: "Downtown Office / Hybrid".to_string(),
            salary: "$75,000 - $95,000".to_string(),
            description: "Perform hydraulic and hydrologic modeling for stormwater and \
                          water treatment projects."
                .to_string(),
            requirements: strings(&[
                "BS in Civil or Environmental Engineering",
                "4+ years of water resources experience",
                "HEC-RAS and SWMM modeling experience",
            ]),
            benefits: strings(&[
                "Health, dental, and vision insurance",
                "Flexible hybrid schedule",
                "Licensure exam support",
            ]),
        },
        JobListing {
            id: 3,
            title: "Construction Inspector".to_string(),
            department: "Construction Management".to_string(),
            job_type: "Contract".to_string(),
            location: "Field / Various Sites".to_string(),
            salary: "$60,000 - $78,000".to_string(),
            description: "Provide on-site inspection and quality assurance for active \
                          infrastructure projects."
                .to_string(),
            requirements: strings(&[
                "3+ years of field inspection experience",
                "Working knowledge of construction standards and codes",
                "Valid driver's license",
            ]),
            benefits: strings(&[
                "Vehicle allowance",
                "Overtime eligibility",
                "Safety certification reimbursement",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_post(title: &str, excerpt: &str, category: &str) -> BlogPost {
        BlogPost {
            id: 1,
            title: title.to_string(),
            slug: "slug".to_string(),
            excerpt: excerpt.to_string(),
            content: String::new(),
            author: "Author".to_string(),
            category: category.to_string(),
            image_url: String::new(),
            published_at: Utc::now(),
        }
    }

    #[test]
    fn test_catalog_collections_are_seeded() {
        let catalog = Catalog::new();
        assert_eq!(catalog.services().len(), 9);
        assert_eq!(catalog.process_steps().len(), 4);
        assert_eq!(catalog.projects().len(), 6);
        assert_eq!(catalog.team_members().len(), 6);
        assert_eq!(catalog.departments().len(), 6);
        assert_eq!(catalog.job_listings().len(), 3);
    }

    #[test]
    fn test_job_listings_ordered_by_title() {
        let catalog = Catalog::new();
        let titles: Vec<&str> = catalog
            .job_listings()
            .iter()
            .map(|j| j.title.as_str())
            .collect();
        let mut sorted = titles.clone();
        sorted.sort_unstable();
        assert_eq!(titles, sorted);
    }

    #[test]
    fn test_filter_projects_all_returns_everything() {
        let catalog = Catalog::new();
        assert_eq!(
            filter_projects(catalog.projects(), "all").len(),
            catalog.projects().len()
        );
    }

    #[test]
    fn test_filter_projects_by_category() {
        let catalog = Catalog::new();
        let environmental = filter_projects(catalog.projects(), "environmental");
        assert_eq!(environmental.len(), 2);
        assert!(environmental.iter().all(|p| p.category == "environmental"));
    }

    #[test]
    fn test_filter_projects_unknown_category_is_empty() {
        let catalog = Catalog::new();
        assert!(filter_projects(catalog.projects(), "aerospace").is_empty());
    }

    #[test]
    fn test_filter_blog_posts_search_is_case_insensitive() {
        let posts = vec![
            sample_post("Smart Bridges", "sensors everywhere", "Technology"),
            sample_post("Green Concrete", "low-carbon mixes", "Sustainability"),
        ];
        let hits = filter_blog_posts(&posts, "SMART", "all");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Smart Bridges");
    }

    #[test]
    fn test_filter_blog_posts_matches_excerpt_and_category() {
        let posts = vec![
            sample_post("Smart Bridges", "sensors everywhere", "Technology"),
            sample_post("Green Concrete", "low-carbon mixes", "Sustainability"),
        ];
        let by_excerpt = filter_blog_posts(&posts, "carbon", "all");
        assert_eq!(by_excerpt.len(), 1);

        let by_category = filter_blog_posts(&posts, "", "Technology");
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].category, "Technology");

        assert!(filter_blog_posts(&posts, "carbon", "Technology").is_empty());
    }

    #[test]
    fn test_job_listing_type_serializes_as_type() {
        let catalog = Catalog::new();
        let json = serde_json::to_value(&catalog.job_listings()[0]).unwrap();
        assert!(json.get("type").is_some());
        assert!(json.get("jobType").is_none());
    }
}
