/// 面试方向枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum InterviewTopic {
    /// JavaScript
    JavaScript,
    /// TypeScript
    TypeScript,
    /// Python
    Python,
    /// Java
    Java,
    /// Rust
    Rust,
    /// 数据结构
    DataStructures,
    /// 算法
    Algorithms,
    /// 系统设计
    SystemDesign,
    /// 数据库
    Databases,
    /// 计算机网络
    Networking,
    /// 操作系统
    OperatingSystems,
    /// 行为面试
    Behavioral,
}

impl InterviewTopic {
    /// 获取标准名称（写入题库时使用）
    pub fn name(self) -> &'static str {
        match self {
            InterviewTopic::JavaScript => "JavaScript",
            InterviewTopic::TypeScript => "TypeScript",
            InterviewTopic::Python => "Python",
            InterviewTopic::Java => "Java",
            InterviewTopic::Rust => "Rust",
            InterviewTopic::DataStructures => "Data Structures",
            InterviewTopic::Algorithms => "Algorithms",
            InterviewTopic::SystemDesign => "System Design",
            InterviewTopic::Databases => "Databases",
            InterviewTopic::Networking => "Networking",
            InterviewTopic::OperatingSystems => "Operating Systems",
            InterviewTopic::Behavioral => "Behavioral",
        }
    }

    /// 获取提示词中的方向描述（英文，供 LLM 使用）
    pub fn prompt_hint(self) -> &'static str {
        match self {
            InterviewTopic::JavaScript => {
                "JavaScript language fundamentals: closures, prototypes, the event loop, async patterns"
            }
            InterviewTopic::TypeScript => {
                "TypeScript: the type system, generics, narrowing, interop with JavaScript"
            }
            InterviewTopic::Python => {
                "Python: language semantics, iterators and generators, the data model, typing"
            }
            InterviewTopic::Java => {
                "Java: the JVM, collections, concurrency primitives, garbage collection"
            }
            InterviewTopic::Rust => {
                "Rust: ownership and borrowing, lifetimes, traits, error handling, async"
            }
            InterviewTopic::DataStructures => {
                "data structures: arrays, linked lists, hash tables, trees, heaps, tradeoffs"
            }
            InterviewTopic::Algorithms => {
                "algorithms: complexity analysis, sorting, searching, recursion, dynamic programming"
            }
            InterviewTopic::SystemDesign => {
                "system design: scalability, caching, load balancing, data partitioning, consistency"
            }
            InterviewTopic::Databases => {
                "databases: SQL, indexing, transactions, isolation levels, schema design"
            }
            InterviewTopic::Networking => {
                "computer networking: TCP/IP, HTTP, DNS, TLS, common failure modes"
            }
            InterviewTopic::OperatingSystems => {
                "operating systems: processes and threads, scheduling, memory management, file systems"
            }
            InterviewTopic::Behavioral => {
                "behavioral interview: teamwork, conflict resolution, project ownership, communication"
            }
        }
    }

    /// 尝试从字符串解析面试方向（大小写不敏感，支持常见别名）
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "javascript" | "js" => Some(InterviewTopic::JavaScript),
            "typescript" | "ts" => Some(InterviewTopic::TypeScript),
            "python" | "py" => Some(InterviewTopic::Python),
            "java" => Some(InterviewTopic::Java),
            "rust" | "rs" => Some(InterviewTopic::Rust),
            "data structures" | "data_structures" | "datastructures" | "ds" => {
                Some(InterviewTopic::DataStructures)
            }
            "algorithms" | "algorithm" | "algo" => Some(InterviewTopic::Algorithms),
            "system design" | "system_design" | "systemdesign" => Some(InterviewTopic::SystemDesign),
            "databases" | "database" | "db" | "sql" => Some(InterviewTopic::Databases),
            "networking" | "network" | "networks" => Some(InterviewTopic::Networking),
            "operating systems" | "operating_systems" | "operatingsystems" | "os" => {
                Some(InterviewTopic::OperatingSystems)
            }
            "behavioral" | "behavioural" | "hr" => Some(InterviewTopic::Behavioral),
            _ => None,
        }
    }
}

impl std::fmt::Display for InterviewTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
