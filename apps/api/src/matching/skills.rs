//! Built-in skill vocabulary.
//!
//! Covers the domains résumés actually mention: languages, frontend, backend,
//! databases, DevOps and cloud, ML/AI, security, mobile, everyday tooling,
//! and operating systems. Override with a newline-separated file via the
//! `SKILLS_FILE` environment variable.
//!
//! Entries are display-cased; duplicates across categories (e.g. "GraphQL")
//! collapse first-wins when the vocabulary is compiled.

pub const DEFAULT_SKILLS: &[&str] = &[
    // Programming languages
    "Python",
    "JavaScript",
    "JS",
    "Java",
    "C",
    "C++",
    "C#",
    "Swift",
    "Kotlin",
    "Go",
    "Rust",
    "PHP",
    "Ruby",
    "Perl",
    "TypeScript",
    "R",
    "Scala",
    "Dart",
    "Objective-C",
    "Shell Scripting",
    "Bash",
    "Lua",
    "Haskell",
    "MATLAB",
    "Groovy",
    "F#",
    "COBOL",
    "Fortran",
    "VB.NET",
    "Solidity",
    // Frontend
    "HTML5",
    "React",
    "ReactJS",
    "Angular",
    "Vue.js",
    "Svelte",
    "Next.js",
    "Nuxt.js",
    "Tailwind CSS",
    "Bootstrap",
    "jQuery",
    "Ember.js",
    "Backbone.js",
    "WebAssembly",
    "Three.js",
    // Backend
    "Node.js",
    "Django",
    "Flask",
    "Spring Boot",
    "Express.js",
    "FastAPI",
    "Ruby on Rails",
    "ASP.NET",
    "Laravel",
    "Symfony",
    "CodeIgniter",
    "Ktor",
    "Gin",
    "Phoenix",
    "GraphQL",
    // Databases
    "MySQL",
    "SQL",
    "PostgreSQL",
    "noSQL",
    "MongoDB",
    "SQLite",
    "Redis",
    "Cassandra",
    "Firebase",
    "DynamoDB",
    "Elasticsearch",
    "MariaDB",
    "CouchDB",
    "Neo4j",
    // DevOps and cloud
    "AWS",
    "Azure",
    "Google Cloud",
    "Docker",
    "Kubernetes",
    "Terraform",
    "Ansible",
    "Jenkins",
    "GitLab CI/CD",
    "Bamboo",
    "Prometheus",
    "Grafana",
    "Cloudflare",
    "NGINX",
    "Apache Kafka",
    "Serverless",
    "OpenShift",
    // Machine learning and AI
    "Machine Learning",
    "Deep Learning",
    "TensorFlow",
    "PyTorch",
    "Keras",
    "OpenCV",
    "scikit-learn",
    "Pandas",
    "NumPy",
    "Matplotlib",
    "Seaborn",
    "NLTK",
    "spaCy",
    "Hugging Face",
    "XGBoost",
    "LightGBM",
    "Data Mining",
    "Big Data",
    "LLMs",
    "NLP",
    "Reinforcement Learning",
    "Computer Vision",
    "MLOps",
    "LlamaIndex",
    // Security and networking
    "Ethical Hacking",
    "Penetration Testing",
    "Cybersecurity",
    "Wireshark",
    "Metasploit",
    "Burp Suite",
    "Nmap",
    "Snort",
    "Splunk",
    "Firewalls",
    "Intrusion Detection",
    "Zero Trust Security",
    "SOC",
    "SIEM",
    "IDS/IPS",
    // Mobile
    "Flutter",
    "React Native",
    "Xamarin",
    "Ionic",
    "Apache Cordova",
    "Jetpack Compose",
    "Android Studio",
    "ARKit",
    "CoreML",
    // Tools and software
    "Git",
    "GitHub",
    "Bitbucket",
    "JIRA",
    "Confluence",
    "Trello",
    "Slack",
    "Microsoft Teams",
    "VS Code",
    "Eclipse",
    "IntelliJ IDEA",
    "PyCharm",
    "NetBeans",
    "Xcode",
    "Postman",
    "Swagger",
    "Figma",
    "Adobe XD",
    "Sketch",
    "InVision",
    // Operating systems
    "Linux",
    "Ubuntu",
    "Windows Server",
    "macOS",
    "Red Hat",
    "Debian",
    "CentOS",
    "Fedora",
    "Arch Linux",
    "Kali Linux",
    "FreeBSD",
];
