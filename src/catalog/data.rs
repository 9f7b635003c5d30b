//! Compiled-in project tables.

use super::{NO_DEMO, ProjectDetail, ProjectSummary};

pub const CATALOG: &[ProjectSummary] = &[
    ProjectSummary {
        id: 1,
        name: "Real Time Chat App",
        summary: "A Flutter-based real-time chat app with Firebase backend and user authentication, enabling secure sign-up/login, instant messaging, and synced conversations across devices.",
        tech_stack: &["Dart", "Flutter", "Firebase Auth", "Cloud Firestore", "Provider"],
        image: "/project-images/chatapp/chatapp-logo.jpg",
        demo_link: NO_DEMO,
        github_link: "https://github.com/justice-adeniji/chat-app",
        story: "Built to provide fast, reliable chat experiences with seamless cross-device syncing.",
    },
    ProjectSummary {
        id: 2,
        name: "Weather App",
        summary: "A React-based weather application that fetches and displays current weather conditions for any location worldwide. Users can simply type the name of a city or place to instantly see temperature, weather description, and other key details in a clean, responsive UI.",
        tech_stack: &["JavaScript", "React", "OpenWeather API", "CSS"],
        image: "/project-images/weather-app/weather.svg",
        demo_link: NO_DEMO,
        github_link: "https://github.com/justice-adeniji/react-weather-app",
        story: "Built to give anyone instant access to current weather conditions anywhere in the world.",
    },
    ProjectSummary {
        id: 3,
        name: "Real-time GPS Area Tracker",
        summary: "A Flutter-based mobile application that displays live satellite imagery, tracks the user's movement path, and calculates the exact area covered using spherical geometry. Includes a clean overlay showing area measurements in meters or kilometers with seamless map zoom and panning.",
        tech_stack: &["Flutter", "flutter_map", "ArcGIS World Imagery Tiles", "geolocator", "dart:math", "Material Design"],
        image: "/project-images/area-tracker/area-tracker-logo.png",
        demo_link: NO_DEMO,
        github_link: "https://github.com/justice-adeniji/area-tracker",
        story: "Built to help surveyors, athletes, and outdoor explorers visualize their movement in real-time and measure the area they’ve covered.",
    },
];

pub const DETAILS: &[ProjectDetail] = &[
    ProjectDetail {
        id: 1,
        name: "Real Time Chat App",
        summary: "A Flutter-based real-time chat app with Firebase backend and user authentication, enabling secure sign-up/login, instant messaging, and synced conversations across devices.",
        description: "This project enables instant, secure communication between users with a modern chat interface. Built with Flutter for a smooth cross-platform experience, it integrates Firebase Authentication for user security and Cloud Firestore for real-time message syncing. State management is handled by Provider for clean and scalable architecture.",
        tech_stack: &["Dart", "Flutter", "Firebase Auth", "Cloud Firestore", "Provider"],
        features: &[
            "Real-time one-on-one messaging",
            "User authentication (sign-up/login)",
            "Cross-device message syncing",
            "Clean and responsive chat UI",
        ],
        challenges: &[
            "Ensuring instant message delivery with no lag",
            "Handling authentication edge cases",
            "Managing state efficiently for performance",
        ],
        images: &[
            "/project-images/chatapp/chat-screen.jpg",
            "/project-images/chatapp/login-screen.jpg",
            "/project-images/chatapp/signup-screen.jpg",
        ],
        built_for: "Built to provide fast, reliable chat experiences with seamless cross-device syncing.",
        demo_link: NO_DEMO,
        github_link: "https://github.com/justice-adeniji/chat-app",
    },
    ProjectDetail {
        id: 2,
        name: "Weather App",
        summary: "A React-based weather application that fetches and displays current weather conditions for any location worldwide.",
        description: "This app provides instant access to real-time weather data anywhere in the world. Built with React and powered by the OpenWeather API, users can search for a city or place to instantly see temperature, weather description, and other conditions in a clean, responsive interface.",
        tech_stack: &["JavaScript", "React", "OpenWeather API", "CSS"],
        features: &[
            "Instant weather search by city or location",
            "Displays temperature, weather type, and humidity",
            "Responsive and clean user interface",
            "API integration for real-time weather data",
        ],
        challenges: &[
            "Optimizing API calls for fast response times",
            "Handling incorrect or misspelled location inputs",
            "Ensuring mobile responsiveness",
        ],
        images: &[
            "/project-images/weather-app/home-screen.jpg",
            "/project-images/weather-app/search-demo.jpg",
        ],
        built_for: "Built to give anyone instant access to current weather conditions anywhere in the world.",
        demo_link: NO_DEMO,
        github_link: "https://github.com/justice-adeniji/react-weather-app",
    },
    ProjectDetail {
        id: 3,
        name: "Real-time GPS Area Tracker",
        summary: "A Flutter-based mobile app that displays live satellite imagery, tracks movement paths, and calculates the area covered using spherical geometry.",
        description: "This app uses GPS tracking to monitor and display a user's movement in real-time over satellite imagery. It calculates the exact area covered using spherical geometry, making it perfect for surveyors, athletes, and outdoor explorers. The UI features a live map with an overlay showing area measurements in meters or kilometers.",
        tech_stack: &["Flutter", "flutter_map", "ArcGIS World Imagery Tiles", "geolocator", "dart:math", "Material Design"],
        features: &[
            "Real-time GPS tracking",
            "Satellite imagery display",
            "Area calculation using spherical geometry",
            "Seamless map zoom and panning",
        ],
        challenges: &[
            "Accurately calculating area with spherical geometry",
            "Maintaining location accuracy in low-signal areas",
            "Optimizing map performance with large data",
        ],
        images: &[
            "/project-images/area-tracker/live-map.jpg",
            "/project-images/area-tracker/area-measurement.jpg",
        ],
        built_for: "Built to help surveyors, athletes, and outdoor explorers visualize their movement in real-time and measure the area they’ve covered.",
        demo_link: NO_DEMO,
        github_link: "https://github.com/justice-adeniji/area-tracker",
    },
];
