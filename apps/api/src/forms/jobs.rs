use crate::models::job::JobListing;

/// Listings shown on the jobs page until an applicant tracking system is wired in.
pub static JOB_LISTINGS: [JobListing; 4] = [
    JobListing {
        id: 1,
        title: "Senior Software Engineer",
        company: "TechCorp Solutions",
        location: "San Francisco, CA",
        salary: "$120k - $160k",
        employment_type: "Full-time",
        posted_date: "2 days ago",
        description: "Join our innovative team to build cutting-edge software solutions. We're looking for a passionate developer with 5+ years of experience in React, Node.js, and cloud technologies.",
    },
    JobListing {
        id: 2,
        title: "Marketing Manager",
        company: "Growth Dynamics",
        location: "Remote",
        salary: "$80k - $100k",
        employment_type: "Remote",
        posted_date: "1 week ago",
        description: "Lead our digital marketing initiatives and drive customer acquisition. Experience with SEO, social media marketing, and analytics tools required.",
    },
    JobListing {
        id: 3,
        title: "Product Designer",
        company: "DesignHub Inc.",
        location: "New York, NY",
        salary: "$95k - $125k",
        employment_type: "Full-time",
        posted_date: "3 days ago",
        description: "Create exceptional user experiences for our mobile and web applications. Strong portfolio in UI/UX design and proficiency in Figma required.",
    },
    JobListing {
        id: 4,
        title: "Data Scientist",
        company: "Analytics Pro",
        location: "Los Angeles, CA",
        salary: "$130k - $170k",
        employment_type: "Contract",
        posted_date: "5 days ago",
        description: "Drive insights from complex datasets using machine learning and statistical analysis. PhD in related field and Python/R experience preferred.",
    },
];
